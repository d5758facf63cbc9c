#[cfg(test)]
mod tests {
    use cpf::EPOCH;
    use cpf::config::CPFConfig;
    use cpf::opt::CPFOptimizer;
    use float_cmp::approx_eq;
    use stowage::entities::{
        PackInstance, PackOutcome, PackSolution, Priority, UnplacedReason,
    };
    use stowage::geometry::primitives::Point3;
    use stowage::io::ext_repr::{ExtBin, ExtInstance, ExtItem};
    use stowage::io::{Importer, export};
    use stowage::util::assertions;
    use test_case::test_case;

    fn ext_item(id: &str, dims: (f32, f32, f32), weight: f32) -> ExtItem {
        ExtItem {
            id: id.to_string(),
            length: dims.0,
            width: dims.1,
            height: dims.2,
            weight,
            stackable: true,
            load_capacity: None,
            priority: Priority::Normal,
        }
    }

    fn ext_bin(dims: (f32, f32, f32), weight_limit: f32) -> ExtBin {
        ExtBin {
            length: dims.0,
            width: dims.1,
            height: dims.2,
            weight_limit,
        }
    }

    fn solve(
        items: Vec<ExtItem>,
        bin: ExtBin,
        config: CPFConfig,
    ) -> (PackInstance, PackSolution) {
        let ext_instance = ExtInstance {
            name: "test".to_string(),
            items,
            bin,
        };
        let instance = Importer::new(config.n_decimals)
            .import_instance(&ext_instance)
            .unwrap();
        let solution = CPFOptimizer::new(instance.clone(), config).solve();
        (instance, solution)
    }

    #[test]
    fn single_item_lands_in_a_single_bin() {
        let (instance, solution) = solve(
            vec![ext_item("crate-1", (5.0, 5.0, 5.0), 10.0)],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), 1);
        assert!(solution.unplaced_items.is_empty());

        let ls = &solution.layout_snapshots[0];
        assert_eq!(ls.placed_items.len(), 1);
        assert_eq!(ls.placed_items[0].position, Point3::ORIGIN);
        assert!(approx_eq!(f32, ls.usage, 0.125));

        let ext_solution = export(&instance, &solution, *EPOCH);
        assert_eq!(ext_solution.layouts[0].utilization, 12.5);
    }

    #[test]
    fn two_bin_filling_items_use_two_bins() {
        let (_, solution) = solve(
            vec![
                ext_item("a", (10.0, 10.0, 10.0), 10.0),
                ext_item("b", (10.0, 10.0, 10.0), 10.0),
            ],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), 2);
        for ls in &solution.layout_snapshots {
            assert_eq!(ls.placed_items.len(), 1);
            assert!(approx_eq!(f32, ls.usage, 1.0));
        }
    }

    #[test]
    fn oversize_item_is_rejected_without_opening_bins() {
        let (_, solution) = solve(
            vec![ext_item("pole", (20.0, 1.0, 1.0), 1.0)],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Stalled);
        assert!(solution.layout_snapshots.is_empty());
        assert_eq!(
            solution.unplaced_items,
            vec![(0, UnplacedReason::ExceedsDimension)]
        );
    }

    #[test]
    fn overweight_item_is_rejected_without_opening_bins() {
        let (_, solution) = solve(
            vec![ext_item("anvil", (1.0, 1.0, 1.0), 51.0)],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Stalled);
        assert_eq!(
            solution.unplaced_items,
            vec![(0, UnplacedReason::ExceedsWeight)]
        );
    }

    #[test]
    fn item_fitting_in_a_rotated_orientation_is_placed() {
        // only fits standing up
        let (_, solution) = solve(
            vec![ext_item("plank", (10.0, 2.0, 4.0), 1.0)],
            ext_bin((5.0, 5.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        let pi = &solution.layout_snapshots[0].placed_items[0];
        assert!(pi.dims.h == 10.0);
    }

    #[test]
    fn non_stackable_base_forces_second_bin() {
        let mut base = ext_item("base", (10.0, 10.0, 5.0), 10.0);
        base.stackable = false;
        let top = ext_item("top", (10.0, 10.0, 5.0), 10.0);

        let (_, solution) = solve(
            vec![base, top],
            ext_bin((10.0, 10.0, 10.0), 100.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), 2);
        for ls in &solution.layout_snapshots {
            assert_eq!(ls.placed_items.len(), 1);
        }
    }

    #[test]
    fn stackable_items_share_a_bin() {
        let (_, solution) = solve(
            vec![
                ext_item("base", (10.0, 10.0, 5.0), 10.0),
                ext_item("top", (10.0, 10.0, 5.0), 10.0),
            ],
            ext_bin((10.0, 10.0, 10.0), 100.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), 1);
        assert!(approx_eq!(f32, solution.layout_snapshots[0].usage, 1.0));
    }

    #[test_case(5.0, 2; "capacity too low forces a second bin")]
    #[test_case(20.0, 1; "sufficient capacity stacks in one bin")]
    fn load_capacity_limits_stacking(load_capacity: f32, expected_bins: usize) {
        let mut base = ext_item("base", (10.0, 10.0, 5.0), 10.0);
        base.load_capacity = Some(load_capacity);
        let top = ext_item("top", (10.0, 10.0, 5.0), 10.0);

        let (_, solution) = solve(
            vec![base, top],
            ext_bin((10.0, 10.0, 10.0), 100.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), expected_bins);
    }

    #[test_case(0.75, 2; "overhang past the threshold is refused")]
    #[test_case(0.5, 1; "lower threshold accepts the overhang")]
    fn support_threshold_governs_overhang(support_threshold: f32, expected_bins: usize) {
        // the pillar claims the floor first; the slab only has the pillar's
        // 60% top face to rest on
        let mut pillar = ext_item("pillar", (6.0, 10.0, 5.0), 10.0);
        pillar.priority = Priority::High;
        let slab = ext_item("slab", (10.0, 10.0, 5.0), 10.0);

        let config = CPFConfig {
            support_threshold,
            ..CPFConfig::default()
        };
        let (_, solution) = solve(
            vec![pillar, slab],
            ext_bin((10.0, 10.0, 10.0), 100.0),
            config,
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), expected_bins);
    }

    #[test]
    fn bin_weight_limit_forces_second_bin() {
        let (_, solution) = solve(
            vec![
                ext_item("a", (5.0, 5.0, 5.0), 20.0),
                ext_item("b", (5.0, 5.0, 5.0), 20.0),
                ext_item("c", (5.0, 5.0, 5.0), 20.0),
            ],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        assert_eq!(solution.outcome, PackOutcome::Complete);
        assert_eq!(solution.layout_snapshots.len(), 2);
        for ls in &solution.layout_snapshots {
            let weight = ls.placed_items.iter().map(|pi| pi.weight).sum::<f32>();
            assert!(weight <= 50.0);
        }
    }

    #[test]
    fn high_priority_items_are_packed_first() {
        let mut urgent = ext_item("urgent", (2.0, 2.0, 2.0), 1.0);
        urgent.priority = Priority::High;
        let mut filler = ext_item("filler", (8.0, 8.0, 8.0), 1.0);
        filler.priority = Priority::Low;

        let (instance, solution) = solve(
            vec![filler, urgent],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            CPFConfig::default(),
        );

        let first = &solution.layout_snapshots[0].placed_items[0];
        assert_eq!(instance.item(first.item_id).name, "urgent");
    }

    #[test_case(1, 1; "one pass places one item")]
    #[test_case(2, 2; "two passes place two items")]
    #[test_case(3, 3; "three passes resolve the instance")]
    fn placed_items_grow_with_the_pass_cap(max_passes: usize, expected_placed: usize) {
        let config = CPFConfig {
            max_passes,
            ..CPFConfig::default()
        };
        let (_, solution) = solve(
            vec![
                ext_item("a", (10.0, 10.0, 10.0), 1.0),
                ext_item("b", (10.0, 10.0, 10.0), 1.0),
                ext_item("c", (10.0, 10.0, 10.0), 1.0),
            ],
            ext_bin((10.0, 10.0, 10.0), 50.0),
            config,
        );

        assert_eq!(solution.n_placed_items(), expected_placed);
        match expected_placed == 3 {
            true => assert_eq!(solution.outcome, PackOutcome::Complete),
            false => assert_eq!(solution.outcome, PackOutcome::Exhausted),
        }
    }

    fn mixed_instance() -> (Vec<ExtItem>, ExtBin) {
        let mut items = vec![
            ext_item("crate-a", (5.0, 5.0, 5.0), 8.0),
            ext_item("crate-b", (5.0, 5.0, 5.0), 8.0),
            ext_item("pallet", (10.0, 10.0, 2.0), 12.0),
            ext_item("box-1", (3.0, 4.0, 2.0), 2.0),
            ext_item("box-2", (4.0, 4.0, 4.0), 3.0),
            ext_item("tube", (10.0, 2.0, 2.0), 1.5),
            ext_item("slab", (8.0, 6.0, 1.0), 5.0),
            ext_item("cube", (6.0, 6.0, 6.0), 9.0),
        ];
        items[2].stackable = false;
        items[0].load_capacity = Some(10.0);
        items[3].priority = Priority::High;
        items[7].priority = Priority::Low;

        (items, ext_bin((10.0, 10.0, 10.0), 40.0))
    }

    #[test]
    fn solutions_are_feasible_and_stable() {
        let config = CPFConfig::default();
        let (_, solution) = solve(mixed_instance().0, mixed_instance().1, config);

        assert!(!solution.layout_snapshots.is_empty());
        for ls in &solution.layout_snapshots {
            assert!(assertions::snapshot_is_feasible(ls));
            assert!(assertions::placements_stable(
                &ls.container,
                &ls.placed_items,
                config.support_threshold
            ));
        }
    }

    #[test]
    fn every_item_is_placed_or_reported() {
        let (items, bin) = mixed_instance();
        let n_items = items.len();
        let (_, solution) = solve(items, bin, CPFConfig::default());

        let placed = solution
            .layout_snapshots
            .iter()
            .flat_map(|ls| ls.placed_items.iter().map(|pi| pi.item_id));
        let unplaced = solution.unplaced_items.iter().map(|&(id, _)| id);

        let mut all = placed.chain(unplaced).collect::<Vec<_>>();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n_items);
    }

    #[test]
    fn repeated_runs_yield_identical_placements() {
        let (items, bin) = mixed_instance();
        let (_, first) = solve(items.clone(), bin.clone(), CPFConfig::default());
        let (_, second) = solve(items, bin, CPFConfig::default());

        assert_eq!(first.passes, second.passes);
        assert_eq!(first.layout_snapshots.len(), second.layout_snapshots.len());
        for (ls_a, ls_b) in first.layout_snapshots.iter().zip(&second.layout_snapshots) {
            assert_eq!(ls_a.placed_items.len(), ls_b.placed_items.len());
            for (a, b) in ls_a.placed_items.iter().zip(&ls_b.placed_items) {
                assert_eq!(a.item_id, b.item_id);
                assert_eq!(a.position, b.position);
                assert_eq!(a.rotation, b.rotation);
            }
        }
    }

    #[test]
    fn unplaced_reasons_use_stable_codes() {
        let reason = serde_json::to_value(UnplacedReason::ExceedsDimension).unwrap();
        assert_eq!(reason, serde_json::json!("EXCEEDS_DIMENSION"));
        let reason = serde_json::to_value(UnplacedReason::NoStablePosition).unwrap();
        assert_eq!(reason, serde_json::json!("NO_STABLE_POSITION"));
    }
}
