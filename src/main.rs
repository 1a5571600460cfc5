use anyhow::{bail, ensure, Context};
use augmented_itree::{Interval, IntervalTree};
use log::{debug, info};
use rand::{seq::SliceRandom, Rng};

mod cases;

use cases::MERGE_CASES;

const DEFAULT_ROUNDS: usize = 1000;

/// Merges overlapping intervals one at a time: whatever the tree reports as
/// overlapping the incoming interval is pulled out and absorbed before the
/// union goes back in.
fn merge(input: &[(i32, i32)]) -> anyhow::Result<Vec<(i32, i32)>> {
    let mut tree = IntervalTree::new();
    for &(low, high) in input {
        let mut merged = Interval::new(low, high);
        while let Some((found, ())) = tree.remove(tree.search(merged)) {
            merged = merged.union(&found);
        }
        tree.insert(merged, ());
        tree.check()
            .with_context(|| format!("after inserting {merged}"))?;
        debug!("after {low} {high}:\n{}", tree.print());
    }
    Ok(tree.iter().map(|(i, _)| (i.low, i.high)).collect())
}

/// Eight keys 13 apart, inserted in random order, then four removed.
fn shuffled_keys_round(rng: &mut impl Rng) -> anyhow::Result<()> {
    let mut keys: Vec<i32> = (0..8).map(|i| i * 13).collect();
    keys.shuffle(rng);

    let mut tree = IntervalTree::new();
    for &k in &keys {
        tree.insert(Interval::point(k), k);
    }
    ensure!(tree.len() == keys.len(), "expected {} nodes, found {}", keys.len(), tree.len());
    tree.check()?;
    debug!("keys {keys:?}:\n{}", tree.print());

    for k in [39, 52, 78, 65] {
        let before = tree.len();
        tree.remove_interval(Interval::point(k))
            .with_context(|| format!("removing key {k}"))?;
        ensure!(
            tree.len() == before - 1,
            "removing {k} left {} nodes, expected {}",
            tree.len(),
            before - 1
        );
        tree.check().with_context(|| format!("after removing key {k}"))?;
    }
    ensure!(tree.len() == 4, "expected 4 nodes, found {}", tree.len());
    Ok(())
}

fn run(rounds: usize) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    for round in 0..rounds {
        shuffled_keys_round(&mut rng).with_context(|| format!("shuffled keys round {round}"))?;
    }
    info!("passed {rounds} shuffled-key rounds");

    for (i, &(input, expected)) in MERGE_CASES.iter().enumerate() {
        let actual = merge(input).with_context(|| format!("merge case {}", i + 1))?;
        if actual != expected {
            bail!(
                "merge case {} failed: got {:?}, expected {:?}",
                i + 1,
                actual,
                expected
            );
        }
        info!("passed merge case {}", i + 1);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let rounds = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid round count {arg:?}"))?,
        None => DEFAULT_ROUNDS,
    };
    run(rounds)?;
    println!("All tests passed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_merge_cases() {
        let _ = env_logger::builder().is_test(true).try_init();
        run(20).unwrap();
    }

    #[test]
    fn merge_touching_intervals() {
        assert_eq!(merge(&[(1, 4), (4, 5)]).unwrap(), vec![(1, 5)]);
        assert_eq!(
            merge(&[(2, 3), (4, 5), (6, 7), (8, 9), (1, 10)]).unwrap(),
            vec![(1, 10)]
        );
    }
}
