use bft_interp::{BrainfuckVM, VMBuilder};
use bft_types::Program;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.";

// Two nested loops of 255 iterations each, mostly jumps
const NESTED_LOOPS: &str = "-[>-[-]<-]";

fn interpreter_benchmarks(c: &mut Criterion) {
    let mut vm: BrainfuckVM = VMBuilder::new().build();

    c.bench_function("hello_world", |b| {
        b.iter(|| vm.execute(black_box(HELLO_WORLD), "").expect("Interpretation failed"));
    });

    let program = Program::new(NESTED_LOOPS);
    c.bench_function("nested_loops", |b| {
        b.iter(|| vm.interpret(black_box(&program), "").expect("Interpretation failed"));
    });

    let input = "The quick brown fox jumps over the lazy dog. ".repeat(100);
    c.bench_function("cat", |b| {
        b.iter(|| vm.execute(",[.,]", black_box(&input)).expect("Interpretation failed"));
    });
}

criterion_group!(benches, interpreter_benchmarks);
criterion_main!(benches);
