//! Example comparing two wedging cache versions side by side.

use anyhow::Result;
use ncache_ranges::{compute_wedging_values, AlignConfig, FrameSequence, Interval, RangeAligner};

fn main() -> Result<()> {
    // Values a wedge over the cloth stretch resistance would run with
    println!("=== Wedging values ===");
    let values = compute_wedging_values(10.0, 50.0, 5)?;
    println!("stretchResistance: {values:?}");

    // Two versions of the same cloth, recorded over different frame ranges
    println!("\n=== Recording ===");
    let mut v001 = FrameSequence::new(Interval::new(1001, 1012)?);
    let mut v002 = FrameSequence::new(Interval::new(1018, 1030)?);
    while !v001.is_full() {
        let frame = v001.push(format!("v001 ({})", v001.len()))?;
        if frame % 4 == 0 {
            println!("v001 recorded frame {frame}");
        }
    }
    for _ in 0..6 {
        v002.push(format!("v002 ({})", v002.len()))?;
    }
    println!(
        "v001 recorded {:?}, v002 recorded {:?}",
        v001.recorded_range(),
        v002.recorded_range()
    );

    // Default contract: the last merged frame is not shown
    println!("\n=== Observed comparison ===");
    let observed = RangeAligner::default().compare_sequences(
        "v001",
        v001.clone(),
        "v002",
        v002.clone(),
    )?;
    println!("{} positions, {} labels", observed.len(), observed.frames().len());

    // Inclusive contract: every recorded frame is shown
    println!("\n=== Inclusive comparison ===");
    let aligner = RangeAligner::new(AlignConfig::inclusive())?;
    let comparison = aligner.compare_sequences("v001", v001, "v002", v002)?;
    let (left_name, right_name) = comparison.names();
    println!("{:>6}  {:<10}  {:<10}", "frame", left_name, right_name);
    for frame in comparison.iter() {
        println!(
            "{:>6}  {:<10}  {:<10}",
            frame.frame.map_or_else(|| "-".to_string(), |f| f.to_string()),
            frame.left.map_or("-", String::as_str),
            frame.right.map_or("-", String::as_str),
        );
    }

    Ok(())
}
