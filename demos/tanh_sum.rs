use mlp_graph::{Activation, BiasMode, Dataset, NetworkBuilder, Sample};
use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

fn main() -> mlp_graph::Result<()> {
    // Task: learn y = tanh(x0 + x1) / 2 on [-1, 1]^2.
    let mut net = NetworkBuilder::new(2, 4, 1)
        .activation(Activation::Tanh)
        .learning_rate(0.02)
        .momentum(0.5)
        .bias(BiasMode::Learned)
        .build_with_seed(0)?;

    let mut rng = StdRng::seed_from_u64(1);
    let dist = Uniform::new(-1.0_f64, 1.0_f64);
    let mut sample = || {
        let x0 = dist.sample(&mut rng);
        let x1 = dist.sample(&mut rng);
        Sample::new(vec![x0, x1], vec![(x0 + x1).tanh() / 2.0])
    };

    let mut train = Dataset::from_samples((0..256).map(|_| sample()).collect())?;
    let test = Dataset::from_samples((0..64).map(|_| sample()).collect())?;

    let report = net.train(&mut train, 200)?;
    let test_mse = net.evaluate_mse(&test)?;
    println!(
        "shape={} train_mse={:.6} test_mse={test_mse:.6}",
        net.shape(),
        report.final_loss.unwrap_or(f64::NAN)
    );

    Ok(())
}
