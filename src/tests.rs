#[cfg(test)]
mod partition_tests {
    use crate::editing::{Layout, PageGeometry};
    use crate::panels::{recompute_panels, Cut, CutId};
    use kurbo::Point;

    fn rect(w: f64, h: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(0.0, h),
        ]
    }

    #[test]
    fn test_grid_without_gutter_tiles_the_rect() {
        let cuts = [
            Cut::global(CutId(1), Point::new(100.0, 0.0), Point::new(100.0, 100.0)),
            Cut::global(CutId(2), Point::new(0.0, 50.0), Point::new(200.0, 50.0)),
        ];
        let partition = recompute_panels(&rect(200.0, 100.0), 0.0, &cuts);
        assert_eq!(partition.panels.len(), 4);

        let total: f64 = partition.panels.iter().map(|p| p.area()).sum();
        assert!((total - 200.0 * 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut layout = Layout::new(PageGeometry::new(400.0, 300.0, 0.0, 0.0), 12.0);
        layout.generate_grid(2, 3);
        let right = layout.panels()[5].id;
        layout.split_panel(right, crate::editing::SplitAxis::Vertical);

        let before = layout.panels().to_vec();
        layout.recompute();
        assert_eq!(layout.panels(), before.as_slice());
    }

    #[test]
    fn test_ids_survive_unrelated_allocation() {
        let mut layout = Layout::new(PageGeometry::new(400.0, 300.0, 0.0, 0.0), 10.0);
        layout.generate_grid(1, 2);
        let ids: Vec<_> = layout.panels().iter().map(|p| p.id).collect();

        // Allocate and discard a few cut ids
        let right = ids[1];
        for _ in 0..3 {
            layout.split_panel(right, crate::editing::SplitAxis::Horizontal);
            let last = layout.cuts().len() - 1;
            layout.delete_cut(last);
        }
        assert_eq!(layout.ids().peek(), 5);

        let after: Vec<_> = layout.panels().iter().map(|p| p.id).collect();
        assert_eq!(after, ids);

        // A split aimed at the untouched panel still lands
        layout.split_panel(ids[0], crate::editing::SplitAxis::Horizontal);
        assert_eq!(layout.panels().len(), 3);
        assert!(layout.panel(ids[0]).is_none());
        assert!(layout.panel(ids[1]).is_some());
    }
}

#[cfg(test)]
mod merge_tests {
    use crate::editing::{Layout, PageGeometry, SplitAxis};

    fn strip() -> Layout {
        // 1x3 strip: columns at x 0..128.3, 138.3..261.7, 271.7..400
        let mut layout = Layout::new(PageGeometry::new(400.0, 300.0, 0.0, 0.0), 10.0);
        layout.generate_grid(1, 3);
        layout
    }

    #[test]
    fn test_merge_removes_only_the_shared_gutter() {
        let mut layout = strip();
        let middle = layout.panels()[1].id;
        let right = layout.panels()[2].id;

        assert!(layout.merge_panels(&[middle, right]));
        assert_eq!(layout.panels().len(), 2);

        let left = layout.panels()[0].bounds();
        let merged = layout.panels()[1].bounds();
        assert!((left.x1 - 128.333_333).abs() < 1e-3);
        assert!((merged.x0 - 138.333_333).abs() < 1e-3);
        assert!((merged.x1 - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_scoped_cuts_stay_attached_after_rescope() {
        let mut layout = Layout::new(PageGeometry::new(400.0, 300.0, 0.0, 0.0), 10.0);
        layout.generate_grid(2, 2);
        // Left column pieces first, then right column pieces
        let ids: Vec<_> = layout.panels().iter().map(|p| p.id).collect();
        layout.split_panel(ids[2], SplitAxis::Vertical);
        assert_eq!(layout.panels().len(), 5);

        assert!(layout.merge_panels(&[ids[0], ids[1]]));
        assert_eq!(layout.panels().len(), 4);
        assert!(layout.panel(ids[3]).is_some());
        assert_eq!(layout.cuts().iter().filter(|c| c.is_global()).count(), 1);
    }

    #[test]
    fn test_merge_needs_connection() {
        let mut layout = strip();
        let left = layout.panels()[0].id;
        let right = layout.panels()[2].id;
        let cuts = layout.cuts().to_vec();

        assert!(!layout.merge_panels(&[left, right]));
        assert_eq!(layout.cuts(), cuts.as_slice());
    }
}

#[cfg(test)]
mod invariant_tests {
    use crate::editing::{Layout, PageGeometry};
    use kurbo::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_random_cuts_never_overlap() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let page = PageGeometry::new(400.0, 300.0, 0.0, 0.0);

        for _ in 0..20 {
            let mut layout = Layout::new(page, rng.gen_range(0.0..25.0));
            for _ in 0..rng.gen_range(1..8) {
                let start = Point::new(rng.gen_range(0.0..400.0), rng.gen_range(0.0..300.0));
                let end = Point::new(rng.gen_range(0.0..400.0), rng.gen_range(0.0..300.0));
                layout.add_cut(start, end);
            }

            let panels = layout.panels();
            let total: f64 = panels.iter().map(|p| p.area()).sum();
            assert!(total <= 400.0 * 300.0 + 1e-6);

            for (i, a) in panels.iter().enumerate() {
                let b = a.bounds();
                assert!(b.x0 >= -1e-6 && b.y0 >= -1e-6);
                assert!(b.x1 <= 400.0 + 1e-6 && b.y1 <= 300.0 + 1e-6);

                for (j, other) in panels.iter().enumerate() {
                    if i != j {
                        assert!(
                            !other.contains(a.center()),
                            "panel {} overlaps panel {}",
                            a.id,
                            other.id
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod session_tests {
    use crate::data::{load_session, save_session, Session};
    use crate::editing::{Layout, PageGeometry, SplitAxis};

    #[test]
    fn test_session_round_trip() {
        let mut layout = Layout::new(PageGeometry::default(), 16.0);
        layout.generate_grid(2, 2);
        let first = layout.panels()[0].id;
        layout.split_panel(first, SplitAxis::Horizontal);
        let ids: Vec<_> = layout.panels().iter().map(|p| p.id).collect();
        layout.merge_panels(&[ids[3], ids[4]]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        save_session(&path, &Session::from_layout(&layout)).unwrap();

        let restored = load_session(&path).unwrap().into_layout().unwrap();
        assert_eq!(restored.cuts(), layout.cuts());
        assert_eq!(restored.panels(), layout.panels());
        assert_eq!(restored.ids(), layout.ids());
    }
}
