use mlp_graph::{Activation, NetworkBuilder, NetworkShape};

fn main() -> mlp_graph::Result<()> {
    let net = NetworkBuilder::new(3, 5, 2)
        .activation(Activation::leaky_relu())
        .build_with_seed(0)?;

    let shape = net.shape();
    let json = shape.to_json()?;
    println!("text: {shape}");
    println!("json: {json}");

    let parsed = NetworkShape::from_json(&json)?;
    assert_eq!(parsed, shape);
    Ok(())
}
