use logsquare::{frequency, load_log, record_series, replay_series, LogSquare, RngResult};

fn main() {
    // Simple CLI: --record <path> | --replay <path>
    let mut args = std::env::args().skip(1);
    if let Some(cmd) = args.next() {
        match (cmd.as_str(), args.next()) {
            ("--replay", Some(path)) => replay(&path),
            ("--record", Some(path)) => record(&path),
            _ => eprintln!("usage: logsquare [--record <path> | --replay <path>]"),
        }
        return;
    }

    if let Err(e) = demo() {
        eprintln!("generator error: {e}");
    }
}

fn replay(path: &str) {
    match load_log(path) {
        Some(log) => match replay_series(&log) {
            Ok(()) => println!(
                "Replay OK: {} draws reseeded at {}",
                log.values.len(),
                log.millis
            ),
            Err(e) => println!("Replay FAILED: {e}"),
        },
        None => eprintln!("Failed to load series log: {path}"),
    }
}

fn record(path: &str) {
    match record_series(1000, 1000) {
        Ok(log) => match std::fs::write(path, log.to_json()) {
            Ok(()) => println!("Recorded {} draws to {path}", log.values.len()),
            Err(e) => eprintln!("Failed to write {path}: {e}"),
        },
        Err(e) => eprintln!("generator error: {e}"),
    }
}

fn demo() -> RngResult<()> {
    let mut rng = LogSquare::new();

    // A series of 1,000 floats over the full f32 range.
    series_f32(&mut rng, 1000, f32::MAX)?;

    // A series of 1,000 floats in [0, 1000).
    series_f32(&mut rng, 1000, 1000.0)?;

    // A series of 1,000 longs in [0, i64::MAX).
    series_i64(&mut rng, 1000, i64::MAX)?;

    // A series of 100,000 ints in [0, 1000).
    series_i32(&mut rng, 100_000, 1000, false)
}

fn series_f32(rng: &mut LogSquare, len: usize, range: f32) -> RngResult<()> {
    rng.randomize()?;
    for _ in 0..len {
        print!("{}, ", rng.next_f32(range)?);
    }
    println!();
    Ok(())
}

fn series_i64(rng: &mut LogSquare, len: usize, range: i64) -> RngResult<()> {
    rng.randomize()?;
    for _ in 0..len {
        print!("{}, ", rng.next_i64(range)?);
    }
    println!();
    Ok(())
}

fn series_i32(rng: &mut LogSquare, len: usize, range: i32, print_table: bool) -> RngResult<()> {
    rng.randomize()?;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        let r = rng.next_i32(range)?;
        values.push(r);
        print!("{r}, ");
    }
    println!();

    if print_table {
        for (i, count) in frequency(&values, range).iter().enumerate() {
            println!("{i}: {count}");
        }
    }
    Ok(())
}
