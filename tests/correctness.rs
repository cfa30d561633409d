use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strided_num::backend::{ActiveBackend, Level1Backend};
use strided_num::{
    asum, axpy, copy, cusum, cusum_kbn, dot, iamax, mskmax, mskmin, nansum, nrm2, nrm2_complex,
    rot, scal, sum, sum_kbn, swap, VectorView, VectorViewMut,
};

fn random_buffer(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

#[test]
fn test_strided_sum_every_other_element() {
    // N=4, stride 2 over [1..8] selects [1, 3, 5, 7]
    let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let x = VectorView::new(&data, 4, 2, 0).unwrap();
    assert_eq!(sum(&x), 16.0);
    assert_eq!(sum_kbn(&x), 16.0);
}

#[test]
fn test_iamax_first_tie_wins_across_buffer() {
    let data = vec![-5.0, 3.0, -5.0, 2.0];
    let x = VectorView::from_slice(&data);
    assert_eq!(iamax(&x), Some(0));
}

#[test]
fn test_direction_symmetry_randomized() {
    // A reduction over stride s must equal the same reduction over the
    // logically reversed buffer traversed with stride -s.
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &(n, s) in &[(1usize, 1isize), (7, 1), (16, 3), (33, 2)] {
        let span = (n - 1) * s.unsigned_abs() + 1;
        let data = random_buffer(&mut rng, span);
        let fwd = VectorView::with_stride(&data, n, s).unwrap();

        let mut reversed: Vec<f64> = data.clone();
        reversed.reverse();
        let rev = VectorView::with_stride(&reversed, n, -s).unwrap();

        let fwd_vals: Vec<f64> = fwd.iter().collect();
        let rev_vals: Vec<f64> = rev.iter().collect();
        assert_eq!(fwd_vals, rev_vals);

        assert_eq!(sum(&fwd), sum(&rev));
        assert_eq!(sum_kbn(&fwd), sum_kbn(&rev));
        assert_eq!(asum(&fwd), asum(&rev));
        assert_eq!(nrm2(&fwd), nrm2(&rev));
        assert_eq!(iamax(&fwd), iamax(&rev));
    }
}

#[test]
fn test_empty_reductions_return_identity() {
    let data: Vec<f64> = vec![];
    let x = VectorView::new(&data, 0, 1, 0).unwrap();
    assert_eq!(sum(&x), 0.0);
    assert_eq!(sum_kbn(&x), 0.0);
    assert_eq!(asum(&x), 0.0);
    assert_eq!(nrm2(&x), 0.0);
    assert_eq!(nansum(&x), (0.0, 0));
    assert_eq!(iamax(&x), None);
}

#[test]
fn test_empty_transformations_write_nothing() {
    let src: Vec<f64> = vec![];
    let mut dst = vec![7.0, 7.0];
    let x = VectorView::new(&src, 0, 1, 0).unwrap();
    let mut y = VectorViewMut::new(&mut dst, 0, 1, 0).unwrap();
    copy(&x, &mut y).unwrap();
    axpy(3.0, &x, &mut y).unwrap();
    cusum(0.0, &x, &mut y).unwrap();
    assert_eq!(dst, vec![7.0, 7.0]);
}

#[test]
fn test_nansum_equals_sum_over_finite_subset() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = random_buffer(&mut rng, 64);
    for i in (0..64).step_by(5) {
        data[i] = f64::NAN;
    }
    let finite: Vec<f64> = data.iter().copied().filter(|v| !v.is_nan()).collect();
    let x = VectorView::from_slice(&data);
    let (s, count) = nansum(&x);
    assert_eq!(count, finite.len());
    assert_relative_eq!(s, sum(&VectorView::from_slice(&finite)), max_relative = 1e-12);
}

#[test]
fn test_mskmin_all_masked_returns_sentinel() {
    let data = vec![1.0, 2.0, 3.0];
    let mask = vec![1u8, 1, 1];
    let x = VectorView::from_slice(&data);
    let m = VectorView::from_slice(&mask);
    assert_eq!(mskmin(&x, &m).unwrap(), None);
    assert_eq!(mskmax(&x, &m).unwrap(), None);
}

#[test]
fn test_masked_extrema_with_strided_mask() {
    // mask read through its own stride: entries 0, 2, 4 of the mask buffer
    let data = vec![5.0, -3.0, 8.0];
    let mask = vec![0u8, 9, 1, 9, 0];
    let x = VectorView::from_slice(&data);
    let m = VectorView::new(&mask, 3, 2, 0).unwrap();
    // mask = [0, 1, 0] -> elements 5.0 and 8.0 remain
    assert_eq!(mskmin(&x, &m).unwrap(), Some(5.0));
    assert_eq!(mskmax(&x, &m).unwrap(), Some(8.0));
}

#[test]
fn test_swap_round_trip_restores_buffers() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut a = random_buffer(&mut rng, 9);
    let mut b = random_buffer(&mut rng, 9);
    let a0 = a.clone();
    let b0 = b.clone();
    for _ in 0..2 {
        let mut x = VectorViewMut::with_stride(&mut a, 5, 2).unwrap();
        let mut y = VectorViewMut::with_stride(&mut b, 5, -2).unwrap();
        swap(&mut x, &mut y).unwrap();
    }
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_deg2rad_round_trip() {
    for i in -720..=720 {
        let x = i as f64 * 0.5;
        assert_relative_eq!(
            strided_num::trig::deg2rad(strided_num::trig::rad2deg(x)),
            x,
            max_relative = 1e-14
        );
    }
}

#[test]
fn test_kbn_sum_is_at_least_as_accurate() {
    // Ill-conditioned alternating series: naive summation collapses to 0.
    let data = vec![1.0, 1.0e16, 2.0, -1.0e16];
    let x = VectorView::from_slice(&data);
    assert_relative_eq!(sum_kbn(&x), 3.0);

    let mut out = vec![0.0; 4];
    cusum_kbn(0.0, &x, &mut VectorViewMut::from_slice(&mut out)).unwrap();
    assert_relative_eq!(out[3], 3.0);
}

#[test]
fn test_cusum_matches_prefix_sums() {
    let mut rng = StdRng::seed_from_u64(11);
    let data = random_buffer(&mut rng, 17);
    let x = VectorView::from_slice(&data);
    let mut out = vec![0.0; 17];
    cusum(0.5, &x, &mut VectorViewMut::from_slice(&mut out)).unwrap();
    let mut acc = 0.5;
    for (v, got) in data.iter().zip(out.iter()) {
        acc += v;
        assert_relative_eq!(acc, *got, max_relative = 1e-12);
    }
}

#[test]
fn test_rot_is_invertible() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut a = random_buffer(&mut rng, 8);
    let mut b = random_buffer(&mut rng, 8);
    let a0 = a.clone();
    let b0 = b.clone();
    let theta: f64 = 1.234;
    let (s, c) = theta.sin_cos();
    {
        let mut x = VectorViewMut::from_slice(&mut a);
        let mut y = VectorViewMut::from_slice(&mut b);
        rot(&mut x, &mut y, c, s).unwrap();
    }
    {
        let mut x = VectorViewMut::from_slice(&mut a);
        let mut y = VectorViewMut::from_slice(&mut b);
        rot(&mut x, &mut y, c, -s).unwrap();
    }
    for i in 0..8 {
        assert_relative_eq!(a[i], a0[i], max_relative = 1e-12);
        assert_relative_eq!(b[i], b0[i], max_relative = 1e-12);
    }
}

#[test]
fn test_scal_then_axpy_agrees_with_reference() {
    let mut rng = StdRng::seed_from_u64(23);
    let xs = random_buffer(&mut rng, 12);
    let mut ys = random_buffer(&mut rng, 12);
    let expected: Vec<f64> = xs.iter().zip(ys.iter()).map(|(x, y)| 2.5 * x + y).collect();
    let x = VectorView::from_slice(&xs);
    let mut y = VectorViewMut::from_slice(&mut ys);
    axpy(2.5, &x, &mut y).unwrap();
    for (got, want) in ys.iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, max_relative = 1e-14);
    }

    let mut zs = vec![1.0; 4];
    let mut z = VectorViewMut::with_stride(&mut zs, 2, 2).unwrap();
    scal(3.0, &mut z);
    assert_eq!(zs, vec![3.0, 1.0, 3.0, 1.0]);
}

#[test]
fn test_backend_agrees_with_portable_kernels() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = random_buffer(&mut rng, 21);
    let b = random_buffer(&mut rng, 21);
    for &s in &[1isize, 2, -1, -3] {
        let n = if s.unsigned_abs() == 1 { 21 } else { 7 };
        let x = VectorView::with_stride(&a[..(n - 1) * s.unsigned_abs() + 1], n, s).unwrap();
        let y = VectorView::with_stride(&b[..(n - 1) * s.unsigned_abs() + 1], n, s).unwrap();
        assert_relative_eq!(
            ActiveBackend::dot(&x, &y).unwrap(),
            dot(&x, &y).unwrap(),
            max_relative = 1e-12
        );
        assert_relative_eq!(ActiveBackend::asum(&x), asum(&x), max_relative = 1e-12);
        assert_relative_eq!(ActiveBackend::nrm2(&x), nrm2(&x), max_relative = 1e-12);
    }
}

#[test]
fn test_complex_norm_over_interleaved_pairs() {
    use num_complex::Complex64;
    let data = vec![
        Complex64::new(1.0, 2.0),
        Complex64::new(3.0, 4.0),
        Complex64::new(5.0, 6.0),
        Complex64::new(7.0, 8.0),
    ];
    // stride 2 in complex elements spans 4 scalar slots per step
    let x = VectorView::new(&data, 2, 2, 0).unwrap();
    let expected = (1.0f64 + 4.0 + 25.0 + 36.0).sqrt();
    assert_relative_eq!(nrm2_complex(&x), expected, max_relative = 1e-14);

    let flat = strided_num::complex::as_interleaved_f64(&data).unwrap();
    assert_eq!(flat.len(), 8);
    assert_eq!(flat[4], 5.0);
    // scalars 0, 4: the real parts of complex elements 0 and 2
    let y = VectorView::new(flat, 2, 4, 0).unwrap();
    let reals: Vec<f64> = y.iter().collect();
    assert_eq!(reals, vec![1.0, 5.0]);
}

#[test]
fn test_zero_stride_is_well_defined() {
    let data = vec![2.0, 3.0];
    let x = VectorView::new(&data, 5, 0, 1).unwrap();
    assert_eq!(sum(&x), 15.0);
    assert_eq!(iamax(&x), Some(0));
    assert_eq!(nansum(&x), (15.0, 5));
}
