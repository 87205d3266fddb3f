use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mlp_graph::{Activation, Network, NetworkBuilder};

fn network(input: usize, hidden: usize, output: usize) -> Network {
    let mut net = NetworkBuilder::new(input, hidden, output)
        .activation(Activation::Sigmoid)
        .learning_rate(0.01)
        .momentum(0.5)
        .build_with_seed(0)
        .expect("valid config");
    net.initialize().expect("activation is set");
    net
}

fn network_forward_bench(c: &mut Criterion) {
    let mut net = network(64, 128, 10);
    let input = vec![0.1_f64; net.input_size()];

    c.bench_function("network_forward_64_128_10", |b| {
        b.iter(|| {
            net.forward(black_box(&input)).expect("shape matches");
        })
    });
}

fn network_train_step_bench(c: &mut Criterion) {
    let mut net = network(64, 128, 10);
    let input = vec![0.1_f64; net.input_size()];
    let target = vec![0.0_f64; net.output_size()];

    c.bench_function("network_forward_backward_64_128_10", |b| {
        b.iter(|| {
            net.forward(black_box(&input)).expect("shape matches");
            net.backward(black_box(&target)).expect("shape matches");
        })
    });
}

criterion_group!(benches, network_forward_bench, network_train_step_bench);
criterion_main!(benches);
