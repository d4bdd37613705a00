use anyhow::{Context, Result};
use math_vector::{MathVector, Vector};

/// Components passed on the command line, if any.
fn components_from_args() -> Result<Option<Vec<f64>>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok(None);
    }

    let values = args
        .iter()
        .map(|arg| {
            arg.parse::<f64>()
                .with_context(|| format!("Failed to parse component {:?}", arg))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(values))
}

fn main() -> Result<()> {
    let custom_components = components_from_args()?;

    println!("📐 Math Vector Demo");
    println!("===================\n");

    let array = [1.0, 2.0, 3.0];
    let list = vec![4.0, 5.0, 6.0];

    let vector_from_array: Box<dyn MathVector> = Box::new(Vector::from(array));
    let vector_from_list: Box<dyn MathVector> = Box::new(Vector::from_source(Some(list))?);
    let vector_from_vector: Box<dyn MathVector> =
        Box::new(Vector::from_math_vector(vector_from_array.as_ref()));

    println!("Vector from array: {}", vector_from_array);
    println!("Vector from list: {}", vector_from_list);
    println!("Vector from vector: {}", vector_from_vector);

    let (a, b) = (vector_from_array.as_ref(), vector_from_list.as_ref());

    println!("\n🧮 Through dyn MathVector");
    println!("  {} + {} = {}", a, b, a.sum(b)?);
    println!("  {} * {} = {}", a, b, a.multiply(b)?);
    println!("  {} . {} = {}", a, b, a.scalar_multiply(b)?);
    println!("  distance({}, {}) = {:.4}", a, b, a.calc_distance(b)?);
    println!("  {} * 3 = {}", a, a.multiply_number(3.0));
    println!("  |{}| = {:.4}", b, b.length());

    let v1 = Vector::from(array);
    let v2 = Vector::from(vec![4.0, 5.0, 6.0]);

    println!("\n➗ Operators");
    println!("  {} - {} = {}", v1, v2, (&v1 - &v2)?);
    println!("  {} / {} = {}", v2, v1, (&v2 / &v1)?);
    println!("  {} / 2 = {}", v2, (&v2 / 2.0)?);

    if let Some(values) = custom_components {
        let custom = Vector::from(values);
        println!("\n✏️  Vector from arguments: {}", custom);
        println!("  Dimensions: {}", custom.dimensions());
        println!("  Length: {:.4}", custom.length());

        match custom.sum(a) {
            Ok(sum) => println!("  {} + {} = {}", custom, a, sum),
            Err(e) => eprintln!("  ⚠️  Cannot add {} to {}: {}", a, custom, e),
        }
    }

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
