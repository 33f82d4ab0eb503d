//! Benchmark for `KSH` file parsing.

use criterion::{Criterion, Throughput};
use ksh_rs::ksh::{default_config, parse_ksh};

/// Generates a chart of `blocks` blocks, cycling the resolutions 16, 32 and 48.
fn generate_chart(blocks: usize) -> String {
    let mut source = String::from("title=Bench\r\nartist=ksh-rs\r\nt=180\r\nver=167\r\n--\r\n");
    for block in 0..blocks {
        let resolution = 16 * (block % 3 + 1);
        if block % 4 == 0 {
            source.push_str("beat=4/4\r\n");
        }
        for tick in 0..resolution {
            source.push_str(if tick % 4 == 0 { "1000" } else { "0000" });
            source.push_str("|00|");
            source.push_str(if tick % 8 == 0 { "0o" } else { ":-" });
            source.push_str("\r\n");
        }
        source.push_str("--\r\n");
    }
    source
}

fn bench_parse_ksh(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_ksh");

    for blocks in [16, 128, 1024] {
        let source = generate_chart(blocks);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{blocks}_blocks"), |b| {
            b.iter(|| {
                parse_ksh(
                    std::hint::black_box(&source),
                    std::hint::black_box(default_config()),
                )
            });
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_parse_ksh(&mut criterion);
}
