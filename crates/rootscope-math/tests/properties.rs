//! Property tests for the Newton-Raphson trace.

use proptest::prelude::*;
use rootscope_math::prelude::*;

proptest! {
    #[test]
    fn converges_to_square_root(
        a in 0.5_f64..100.0,
        initial_guess in 1.0_f64..50.0,
        tolerance in 1e-9_f64..1e-3,
    ) {
        let problem = (move |x: f64| x * x - a, |x: f64| 2.0 * x);
        let mut finder = RootFinder::new(tolerance).unwrap();

        let root = finder.solve(&problem, initial_guess).unwrap();
        let trace = finder.iterations();

        prop_assert!((root - a.sqrt()).abs() < tolerance);
        prop_assert!(!trace.is_empty());
        prop_assert_eq!(trace[0].x, initial_guess);
        prop_assert!(trace.last().unwrap().delta_x.abs() < tolerance);
        for record in &trace[..trace.len() - 1] {
            prop_assert!(record.delta_x.abs() >= tolerance);
        }
    }

    #[test]
    fn trace_is_indexed_and_consistent(
        c in -20.0_f64..20.0,
        initial_guess in -10.0_f64..10.0,
    ) {
        // x^3 + x - c is strictly increasing, so its derivative never vanishes
        let problem = Polynomial::new(vec![-c, 1.0, 0.0, 1.0]);
        let mut finder = RootFinder::new(1e-8).unwrap();

        let root = finder.solve(&problem, initial_guess).unwrap();
        let trace = finder.iterations();

        prop_assert!(problem.equation(root).abs() < 1e-6);
        for (i, record) in trace.iter().enumerate() {
            prop_assert_eq!(record.index, i);
            prop_assert_eq!(record.delta_x, record.y / record.slope);
        }
        for pair in trace.windows(2) {
            prop_assert_eq!(pair[1].x, pair[0].x - pair[0].delta_x);
        }
        prop_assert_eq!(trace.last().unwrap().next_x(), root);
    }

    #[test]
    fn at_least_one_iteration_at_exact_root(r in -100.0_f64..100.0) {
        let problem = (move |x: f64| x - r, |_: f64| 1.0);
        let mut finder = RootFinder::new(1e-6).unwrap();

        let root = finder.solve(&problem, r).unwrap();

        prop_assert_eq!(root, r);
        prop_assert_eq!(finder.iterations().len(), 1);
    }

    #[test]
    fn non_convergence_respects_cap(
        max_iterations in 1_u32..60,
        initial_guess in 0.1_f64..5.0,
    ) {
        let problem = (|x: f64| x * x + 1.0, |x: f64| 2.0 * x);
        let config = SolverConfig::new(1e-6, max_iterations);
        let mut finder = RootFinder::with_config(config).unwrap();

        let result = finder.solve(&problem, initial_guess);

        let is_non_convergence = matches!(result, Err(MathError::NonConvergence { .. }));
        prop_assert!(is_non_convergence);
        prop_assert_eq!(finder.iterations().len(), max_iterations as usize);
    }
}
