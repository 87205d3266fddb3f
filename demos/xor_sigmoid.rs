use mlp_graph::{Activation, BiasMode, Dataset, NetworkBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> mlp_graph::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Classic XOR dataset.
    let xs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    let mut train = Dataset::from_rows(&xs, &ys)?;

    // 2 -> 3 -> 1 network, sigmoid everywhere, learned biases.
    let mut net = NetworkBuilder::new(2, 3, 1)
        .activation(Activation::Sigmoid)
        .learning_rate(0.5)
        .momentum(0.5)
        .bias(BiasMode::Learned)
        .build_with_seed(0)?;

    let report = net.train(&mut train, 5_000)?;
    let mse = net.evaluate_mse(&train)?;
    println!(
        "final_loss_from_train={:?} train_mse={mse}",
        report.final_loss
    );

    // A few more epochs on the same weights.
    net.fit(&mut train, 500)?;
    println!("after fit: train_mse={}", net.evaluate_mse(&train)?);

    let mut out = [0.0_f64; 1];
    for x in xs {
        net.predict_into(&x, &mut out)?;
        println!("x={x:?} y={:?}", out[0]);
    }

    Ok(())
}
