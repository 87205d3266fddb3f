use mlp_graph::{Activation, Dataset, NetworkBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> mlp_graph::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let xs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
    let mut train = Dataset::from_rows(&xs, &ys)?;

    let mut net = NetworkBuilder::new(2, 3, 1)
        .activation(Activation::Sigmoid)
        .learning_rate(0.3)
        .momentum(0.5)
        .build()?;

    let report = net.train(&mut train, 10_000)?;
    println!("shape={} final_loss={:?}", net.shape(), report.final_loss);

    for x in &xs {
        let y = net.predict(x)?;
        println!("x={x:?} y={:.4}", y[0]);
    }

    Ok(())
}
