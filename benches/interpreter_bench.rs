use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use noop::{Interpreter, Program, RuntimeConfig, parse, runtime::interpreter::SharedOutput};

struct Scenario {
    name: &'static str,
    source: String,
}

fn parse_program(source: &str) -> Program {
    parse(source).unwrap_or_else(|err| panic!("{}", err.render(Some(source), Some("<bench>"))))
}

fn run_program(program: &Program, config: RuntimeConfig) {
    let mut interpreter = Interpreter::new(config).with_output(SharedOutput::new());
    let result = program
        .execute(&mut interpreter)
        .unwrap_or_else(|err| panic!("{}", err));
    black_box(result);
}

fn build_loop_program(iterations: usize) -> String {
    let mut src = String::new();
    let _ = writeln!(src, "var i = 0; var sum = 0;");
    let _ = writeln!(src, "while (i < {iterations}) {{ sum += i * 2 % 7; i += 1; }}");
    let _ = writeln!(src, "sum;");
    src
}

fn build_recursion_program(n: usize) -> String {
    let mut src = String::new();
    let _ = writeln!(
        src,
        "var fib = function(n) {{ if (n < 2) n; else fib(n - 1) + fib(n - 2); }};"
    );
    let _ = writeln!(src, "fib({n});");
    src
}

fn build_allocation_program(count: usize) -> String {
    let mut src = String::new();
    let _ = writeln!(src, "var keep = []; var i = 0;");
    let _ = writeln!(
        src,
        "while (i < {count}) {{ var node = {{id: i, tags: [i, 'x' + i]}}; if (i % 10 == 0) keep[keep.length] = node; i += 1; }}"
    );
    let _ = writeln!(src, "keep.length;");
    src
}

fn build_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "while_loop_10k",
            source: build_loop_program(10_000),
        },
        Scenario {
            name: "fib_18",
            source: build_recursion_program(18),
        },
        Scenario {
            name: "allocate_5k_objects",
            source: build_allocation_program(5_000),
        },
    ]
}

fn bench_interpreter(c: &mut Criterion) {
    let scenarios = build_scenarios();
    let mut group = c.benchmark_group("interpreter/run");

    for scenario in &scenarios {
        let program = parse_program(&scenario.source);
        group.bench_with_input(
            BenchmarkId::from_parameter(scenario.name),
            &program,
            |b, program| {
                b.iter(|| run_program(black_box(program), RuntimeConfig::default()));
            },
        );
    }

    group.finish();
}

fn bench_gc_threshold(c: &mut Criterion) {
    let program = parse_program(&build_allocation_program(5_000));
    let mut group = c.benchmark_group("interpreter/gc_threshold");

    for threshold in [64usize, 1024, 16_384] {
        let config = RuntimeConfig::default().with_gc_threshold(threshold);
        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &config,
            |b, config| {
                b.iter(|| run_program(&program, *config));
            },
        );
    }

    let config = RuntimeConfig::default().with_disable_gc(true);
    group.bench_function("disabled", |b| {
        b.iter(|| run_program(&program, config));
    });

    group.finish();
}

criterion_group!(benches, bench_interpreter, bench_gc_threshold);
criterion_main!(benches);
