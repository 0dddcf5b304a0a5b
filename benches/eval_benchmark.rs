use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plot_rs::engine::{evaluate, evaluate_with_variable};
use plot_rs::graph::{CanvasSize, CanvasTransform, ViewWindow, plot};

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let expressions = [
        ("arithmetic", "2+3*4-5/2"),
        ("parenthesized", "((1+2)*(3+4))^2"),
        ("functions", "sin(1.5)+cos(2.5)*sqrt(16)"),
        ("power_chain", "2^3^2^1"),
    ];

    for (name, expr) in expressions {
        group.bench_function(name, |b| b.iter(|| evaluate(black_box(expr))));
    }

    group.bench_function("with_variable", |b| {
        b.iter(|| evaluate_with_variable(black_box("x^2+sin(x)*3"), black_box(1.25)))
    });

    group.finish();
}

fn bench_plot_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot");

    let transform = CanvasTransform::new(
        ViewWindow::default(),
        CanvasSize {
            width: 320,
            height: 200,
        },
    );

    // one full sampling pass: one evaluation per device column
    for equation in ["x^2", "sin(x)*3", "1/x", "tan(x)"] {
        group.bench_function(equation, |b| {
            b.iter(|| plot::plot_curve(black_box(equation), &transform))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_plot_pass);
criterion_main!(benches);
