use lloyd::{cluster_sizes, Kmeans, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two obvious groups in 2D, seeded with one centroid in each.
    let points = Matrix::from_rows(
        &[
            // Group A (near (0,0))
            vec![0.0, 0.0],
            vec![0.1, 0.0],
            vec![0.0, 0.1],
            vec![0.1, 0.1],
            // Group B (near (10,10))
            vec![10.0, 10.0],
            vec![10.1, 10.0],
            vec![10.0, 10.1],
            vec![10.1, 10.1],
        ],
        "points",
    )?;
    let init = Matrix::from_rows(&[vec![0.0, 0.0], vec![10.0, 10.0]], "centroids")?;

    let fit = Kmeans::new()
        .with_max_iter(300)
        .with_epsilon(1e-4)
        .fit(&points, init)?;

    println!(
        "{:?} after {} iterations, inertia {:.4}, sizes {:?}",
        fit.termination,
        fit.iterations,
        fit.inertia(&points),
        cluster_sizes(&fit.labels, fit.centroids.nrows())
    );
    println!("{}", fit.centroids.format_rows(4));
    Ok(())
}
