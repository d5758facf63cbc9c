use std::time::Instant;

use crate::config::CPFConfig;
use crate::opt::search::{item_placement_order, search};
use itertools::Itertools;
use log::{info, warn};
use stowage::entities::{Container, Layout, PackInstance, PackOutcome, PackSolution, UnplacedReason};
use stowage::geometry::Rotation;
use stowage::util::FPA;
use thousands::Separable;

/// Corner-Point Fill (CPF) optimizer: deterministic first-fit packing over a
/// growing set of identical bins.
///
/// Every pass rebuilds all bins from scratch: opening an extra bin can change
/// which bin a high-priority item claims, so a full re-pack is the only way to
/// keep the packing order intact across the whole bin set.
pub struct CPFOptimizer {
    pub instance: PackInstance,
    pub config: CPFConfig,
    pub position_counter: usize,
}

impl CPFOptimizer {
    pub fn new(instance: PackInstance, config: CPFConfig) -> Self {
        assert!(config.max_passes > 0);
        Self {
            instance,
            config,
            position_counter: 0,
        }
    }

    pub fn solve(&mut self) -> PackSolution {
        let start = Instant::now();

        info!(
            "[CPF] packing {} item(s) with a total volume of {:.1} into bins of volume {:.1}",
            self.instance.items.len(),
            self.instance.total_item_volume(),
            self.instance.bin.volume()
        );

        let (eligible, oversize) = self.classify_items();
        for &(item_id, reason) in &oversize {
            warn!(
                "[CPF] item {} can never fit a bin: {reason:?}",
                self.instance.item(item_id).name
            );
        }

        let mut layouts = vec![];
        let mut unfit = vec![];
        let mut prev_unfit: Option<Vec<usize>> = None;
        let mut stall_count = 0;
        let mut stalled = false;
        let mut passes = 0;

        for k in 1..=self.config.max_passes {
            passes = k;

            //fresh bins every pass, contents are re-derived from scratch
            layouts = (0..k)
                .map(|id| {
                    Layout::new(Container::new(
                        id,
                        self.instance.bin.dims,
                        self.instance.bin.weight_limit,
                    ))
                })
                .collect();

            unfit = self.run_pass(&mut layouts, &eligible);

            if unfit.is_empty() {
                break;
            }
            info!("[CPF] pass {k}: {} item(s) left unfit", unfit.len());

            match prev_unfit.as_ref() == Some(&unfit) {
                true => stall_count += 1,
                false => stall_count = 0,
            }
            if stall_count >= 2 {
                warn!(
                    "[CPF] no progress for {stall_count} consecutive passes, giving up on {} item(s)",
                    unfit.len()
                );
                stalled = true;
                break;
            }
            prev_unfit = Some(unfit.clone());
        }

        let outcome = if unfit.is_empty() {
            match oversize.is_empty() {
                true => PackOutcome::Complete,
                false => PackOutcome::Stalled,
            }
        } else if stalled {
            PackOutcome::Stalled
        } else {
            warn!(
                "[CPF] pass cap of {} reached with {} item(s) unfit",
                self.config.max_passes,
                unfit.len()
            );
            PackOutcome::Exhausted
        };

        let unplaced_items = oversize
            .into_iter()
            .chain(
                unfit
                    .iter()
                    .map(|&item_id| (item_id, UnplacedReason::NoStablePosition)),
            )
            .sorted_by_key(|&(item_id, _)| item_id)
            .collect_vec();

        let solution = PackSolution {
            layout_snapshots: layouts
                .iter()
                .filter(|layout| !layout.is_empty())
                .map(|layout| layout.save())
                .collect(),
            unplaced_items,
            passes,
            outcome,
            time_stamp: Instant::now(),
        };

        info!(
            "[CPF] optimization finished in {:.3}ms ({} positions probed)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.position_counter.separate_with_commas()
        );
        info!(
            "[CPF] solution contains {} items in {} bins with a density of {:.3}%",
            solution.n_placed_items(),
            solution.layout_snapshots.len(),
            solution.density() * 100.0
        );

        solution
    }

    /// One full attempt to place all eligible items into the current set of bins.
    /// Items try bins in creation order and stay in the first bin that accepts them.
    fn run_pass(&mut self, layouts: &mut [Layout], order: &[usize]) -> Vec<usize> {
        let mut unfit = vec![];

        for &item_id in order {
            let item = self.instance.item(item_id);

            let placement = layouts.iter().enumerate().find_map(|(i, layout)| {
                search(layout, item, &self.config, &mut self.position_counter)
                    .map(|(position, rotation)| (i, position, rotation))
            });

            match placement {
                Some((i, position, rotation)) => {
                    layouts[i].place_item(item, position, rotation);
                    info!(
                        "[CPF] placed item {} at {position} [{rotation}] in bin {i}",
                        item.name
                    );
                }
                None => unfit.push(item_id),
            }
        }
        unfit
    }

    /// Splits the items into those eligible for placement and those which can
    /// never fit a bin, regardless of how many bins are opened.
    fn classify_items(&self) -> (Vec<usize>, Vec<(usize, UnplacedReason)>) {
        let bin = &self.instance.bin;
        let mut eligible = vec![];
        let mut oversize = vec![];

        for item_id in item_placement_order(&self.instance) {
            let item = self.instance.item(item_id);
            let fits_any_rotation = Rotation::ALL
                .iter()
                .any(|rotation| rotation.apply(item.dims).fits_within(bin.dims));

            if !fits_any_rotation {
                oversize.push((item_id, UnplacedReason::ExceedsDimension));
            } else if FPA(item.weight) > FPA(bin.weight_limit) {
                oversize.push((item_id, UnplacedReason::ExceedsWeight));
            } else {
                eligible.push(item_id);
            }
        }
        (eligible, oversize)
    }
}
