use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mailtemplate::{extract_placeholders, render_template};

fn newsletter(sections: usize) -> String {
    let mut html = String::from("<html><body><h1>{{ title }}</h1>");
    for i in 0..sections {
        html.push_str(&format!(
            "<section><h2>{{{{heading_{i}}}}}</h2><p>{{{{ body_{i} }}}}</p><p>{{{{ not a field }}}}</p></section>"
        ));
    }
    html.push_str("<footer>{{footer}}</footer></body></html>");
    html
}

fn bench_templating(c: &mut Criterion) {
    let html = newsletter(200);
    let values: HashMap<String, String> = extract_placeholders(&html)
        .into_iter()
        .map(|name| {
            let value = format!("value for {name}");
            (name, value)
        })
        .collect();

    c.bench_function("extract_placeholders", |b| b.iter(|| extract_placeholders(black_box(&html))));
    c.bench_function("render_template", |b| {
        b.iter(|| render_template(black_box(&html), black_box(&values)))
    });
}

criterion_group!(benches, bench_templating);
criterion_main!(benches);
