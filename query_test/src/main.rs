use fp_trie::pattern::PatternSequence;
use fp_trie::trie::Trie;

use log::info;
use rand::Rng;
use std::time::Instant;

fn main() {
    env_logger::init();
    param_sweep();
}

fn random_trie(num_patterns: usize, max_depth: usize) -> Trie {

    let mut rng = rand::thread_rng();

    let mut trie = Trie::new();
    for _ in 0..num_patterns {
        let depth = rng.gen_range(1..=max_depth);
        trie.insert(&PatternSequence::random(depth));
    }
    trie.finalize();

    return trie;
}

fn param_sweep() {

    for num_patterns in [100, 1000, 10000] {
        for max_depth in [4, 8, 12] {

            let trie1 = random_trie(num_patterns, max_depth);
            let trie2 = random_trie(num_patterns, max_depth);

            for _ in 0..10 {

                let start = Instant::now();
                let tanimoto = trie1.similarity_tanimoto(&trie2).unwrap();
                let duration = start.elapsed();
                info!("{} {}: tanimoto {} in {}s", num_patterns, max_depth, tanimoto, duration.as_secs_f64());

                let start = Instant::now();
                let spectrum = trie1.similarity_spectrum(&trie2).unwrap();
                let duration = start.elapsed();
                info!("{} {}: spectrum {} in {}s", num_patterns, max_depth, spectrum, duration.as_secs_f64());

                let start = Instant::now();
                let min = trie1.similarity_min(&trie2).unwrap();
                let duration = start.elapsed();
                info!("{} {}: min {} in {}s", num_patterns, max_depth, min, duration.as_secs_f64());
            }

            let start = Instant::now();
            let mut consensus = trie1.consensus(&trie2);
            consensus.finalize();
            let duration = start.elapsed();
            info!("{} {}: consensus with {} features in {}s",
                num_patterns, max_depth,
                consensus.feature_node_count().unwrap(),
                duration.as_secs_f64());
        }
    }
}
