use kneepoint::{KneeDetector, TrendMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: BIC scores for k = 1..=7 -> knee -> cluster count.
    //
    // The scores rise steeply while extra clusters genuinely help, then
    // flatten once the model starts overfitting. The detector should land
    // on the start of the plateau rather than the global maximum.
    let scores = [-100.0, -80.0, -60.0, -50.0, -48.0, -47.0, -46.5];
    let counts = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    let detector = KneeDetector::new().with_trend_mode(TrendMode::Auto);
    let detection = detector.detect(&scores, &counts)?;

    println!(
        "trend: {:?} (r = {:.4})",
        detection.trend, detection.correlation
    );
    println!(
        "optimal cluster count: {} (index {}, diff value {:.4})",
        detection.optimal_count, detection.optimal_index, detection.optimal_value
    );
    match detection.knee_count {
        Some(k) => println!("knee at cluster count {k}"),
        None => println!("no knee found; reported the diff-curve maximum"),
    }

    // Advisories are plain data; a real caller might log these instead.
    for advisory in &detection.advisories {
        eprintln!("[{}] {}", advisory.severity(), advisory);
    }

    // The derived curves come back for plotting. Print a small table here;
    // a chart-drawing consumer would read the same fields.
    println!("\n  k     c1      diff");
    for i in 0..counts.len() {
        println!(
            "{:>3}  {:>6.3}  {:>6.3}",
            counts[i], detection.curves.c1[i], detection.curves.diff[i]
        );
    }

    Ok(())
}
