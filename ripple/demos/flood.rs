/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Floods a random graph with both traversal labels and logs what the
//! supervisor counted.
//!
//! Run with `cargo run --example flood`; set `RUST_LOG=ripple=trace` to watch
//! individual messages.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ripple::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const NODE_COUNT: usize = 200;
const NEIGHBOR_DENSITY: f64 = 0.02;
const SEED: u64 = 42;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut builder = GraphBuilder::new(NODE_COUNT)?;
    let mut edge_count = 0usize;
    for from in 0..NODE_COUNT {
        for to in 0..NODE_COUNT {
            if from != to && rng.random_bool(NEIGHBOR_DENSITY) {
                builder.connect(from, to)?;
                edge_count += 1;
            }
        }
    }
    info!(nodes = NODE_COUNT, edges = edge_count, "graph assembled");

    let graph = builder.launch();
    for kind in [TraversalKind::BreadthFirst, TraversalKind::DepthFirst] {
        let stats = graph.run(0, kind).await?;
        info!(
            %kind,
            visited = stats.visited_count,
            overhead = stats.message_overhead,
            elapsed = ?stats.elapsed,
            "run complete"
        );
    }

    graph.shutdown().await;
    Ok(())
}
