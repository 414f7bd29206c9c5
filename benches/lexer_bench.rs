use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use noop::syntax::{lexer::Lexer, parse};

struct Corpus {
    name: &'static str,
    source: String,
}

fn build_mixed_syntax_corpus() -> String {
    let mut src = String::with_capacity(256_000);

    for i in 0..2_000usize {
        let _ = writeln!(src, "var value_{i} = {} + {} * ({} - 1);", i, i + 1, i + 2);
        let _ = writeln!(
            src,
            "if (value_{i} >= 10 && value_{i} != 42) {{ value_{i}; }} else {{ 0; }}",
        );
        let _ = writeln!(
            src,
            "{{ var nested_{i} = [1, 2, 3, value_{i}]; nested_{i}[0]; }}"
        );
    }

    src
}

fn build_comment_heavy_corpus() -> String {
    let mut src = String::with_capacity(256_000);

    for i in 0..3_000usize {
        let _ = writeln!(src, "// line comment {i}");
        let _ = writeln!(src, "var x_{i} = {i}; // trailing comment");
        let _ = writeln!(src, "/* block comment {} {} */", i, i + 1);
    }

    src
}

fn build_identifier_heavy_corpus() -> String {
    let mut src = String::with_capacity(256_000);

    for i in 0..4_000usize {
        let _ = writeln!(
            src,
            "var very_long_identifier_name_{i}_with_suffix = another_identifier_{i};",
        );
        let _ = writeln!(
            src,
            "var combined_identifier_{i} = very_long_identifier_name_{i}_with_suffix + another_identifier_{i};",
        );
    }

    src
}

fn build_string_heavy_corpus() -> String {
    let mut src = String::with_capacity(256_000);

    for i in 0..2_500usize {
        let _ = writeln!(
            src,
            "var s_{i} = \"line\\n\\tquote:\\\" slash:\\\\ value {i} done\";",
        );
        let _ = writeln!(src, "var msg_{i} = 'prefix ' + name_{i} + ' suffix';");
    }

    src
}

fn build_corpora() -> Vec<Corpus> {
    vec![
        Corpus {
            name: "mixed_syntax",
            source: build_mixed_syntax_corpus(),
        },
        Corpus {
            name: "comment_heavy",
            source: build_comment_heavy_corpus(),
        },
        Corpus {
            name: "identifier_heavy",
            source: build_identifier_heavy_corpus(),
        },
        Corpus {
            name: "string_escape_heavy",
            source: build_string_heavy_corpus(),
        },
    ]
}

fn lex_with_tokenize(input: &str) -> usize {
    let mut lexer = Lexer::new(input);
    match lexer.tokenize() {
        Ok(tokens) => tokens.len(),
        Err(err) => panic!("{}", err),
    }
}

fn lex_with_peek_loop(input: &str) -> usize {
    let mut lexer = Lexer::new(input);
    let mut token_count = 0usize;

    loop {
        let is_end = match lexer.peek() {
            Ok(token) => token.is_end(),
            Err(err) => panic!("{}", err),
        };
        let _ = lexer.lex();
        token_count += 1;
        if is_end {
            break;
        }
    }

    token_count
}

fn bench_lexer_tokenize(c: &mut Criterion) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group("lexer/tokenize");

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| {
                    let token_count = lex_with_tokenize(black_box(input));
                    black_box(token_count);
                });
            },
        );
    }

    group.finish();
}

fn bench_lexer_peek_loop(c: &mut Criterion) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group("lexer/peek_loop");

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| {
                    let token_count = lex_with_peek_loop(black_box(input));
                    black_box(token_count);
                });
            },
        );
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let corpora = build_corpora();
    let mut group = c.benchmark_group("parser/parse");

    for corpus in &corpora {
        let input = corpus.source.as_str();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(corpus.name),
            input,
            |b, input| {
                b.iter(|| match parse(black_box(input)) {
                    Ok(program) => black_box(program.body.statements.len()),
                    Err(err) => panic!("{}", err),
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_tokenize,
    bench_lexer_peek_loop,
    bench_parse
);
criterion_main!(benches);
