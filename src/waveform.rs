// =============================================================================
// Reference Waveform — 1 kHz + 15 kHz test tone
// =============================================================================
//
// 320 samples of a 1 kHz sine plus a half-amplitude 15 kHz sine, sampled at
// 48 kHz:
//
//   x[n] = sin(2*pi*1000*n/48000) + 0.5 * sin(2*pi*15000*n/48000)
//
// The table is fixed at build time.  The 1 kHz component completes one period
// every 48 samples, so the whole signal covers 6 2/3 periods.

/// Number of samples in the reference waveform.
pub const SIG_LENGTH: usize = 320;

/// Sample rate the table was taken at.
pub const SAMPLE_RATE_HZ: f64 = 48_000.0;

#[rustfmt::skip]
pub static INPUT_SIGNAL_F32_1KHZ_15KHZ: [f64; SIG_LENGTH] = [
    0.0000000000, 0.5924659585, -0.0947343455, 0.1913417162, 1.0000000000,
    0.4174197128, 0.3535533906, 1.2552931065, 0.8660254038, 0.4619397663,
    1.3194792169, 1.1827865776, 0.5000000000, 1.1827865776, 1.3194792169,
    0.4619397663, 0.8660254038, 1.2552931065, 0.3535533906, 0.4174197128,
    1.0000000000, 0.1913417162, -0.0947343455, 0.5924659585, -0.0000000000,
    -0.5924659585, 0.0947343455, -0.1913417162, -1.0000000000, -0.4174197128,
    -0.3535533906, -1.2552931065, -0.8660254038, -0.4619397663, -1.3194792169,
    -1.1827865776, -0.5000000000, -1.1827865776, -1.3194792169, -0.4619397663,
    -0.8660254038, -1.2552931065, -0.3535533906, -0.4174197128, -1.0000000000,
    -0.1913417162, 0.0947343455, -0.5924659585, 0.0000000000, 0.5924659585,
    -0.0947343455, 0.1913417162, 1.0000000000, 0.4174197128, 0.3535533906,
    1.2552931065, 0.8660254038, 0.4619397663, 1.3194792169, 1.1827865776,
    0.5000000000, 1.1827865776, 1.3194792169, 0.4619397663, 0.8660254038,
    1.2552931065, 0.3535533906, 0.4174197128, 1.0000000000, 0.1913417162,
    -0.0947343455, 0.5924659585, 0.0000000000, -0.5924659585, 0.0947343455,
    -0.1913417162, -1.0000000000, -0.4174197128, -0.3535533906, -1.2552931065,
    -0.8660254038, -0.4619397663, -1.3194792169, -1.1827865776, -0.5000000000,
    -1.1827865776, -1.3194792169, -0.4619397663, -0.8660254038, -1.2552931065,
    -0.3535533906, -0.4174197128, -1.0000000000, -0.1913417162, 0.0947343455,
    -0.5924659585, 0.0000000000, 0.5924659585, -0.0947343455, 0.1913417162,
    1.0000000000, 0.4174197128, 0.3535533906, 1.2552931065, 0.8660254038,
    0.4619397663, 1.3194792169, 1.1827865776, 0.5000000000, 1.1827865776,
    1.3194792169, 0.4619397663, 0.8660254038, 1.2552931065, 0.3535533906,
    0.4174197128, 1.0000000000, 0.1913417162, -0.0947343455, 0.5924659585,
    0.0000000000, -0.5924659585, 0.0947343455, -0.1913417162, -1.0000000000,
    -0.4174197128, -0.3535533906, -1.2552931065, -0.8660254038, -0.4619397663,
    -1.3194792169, -1.1827865776, -0.5000000000, -1.1827865776, -1.3194792169,
    -0.4619397663, -0.8660254038, -1.2552931065, -0.3535533906, -0.4174197128,
    -1.0000000000, -0.1913417162, 0.0947343455, -0.5924659585, -0.0000000000,
    0.5924659585, -0.0947343455, 0.1913417162, 1.0000000000, 0.4174197128,
    0.3535533906, 1.2552931065, 0.8660254038, 0.4619397663, 1.3194792169,
    1.1827865776, 0.5000000000, 1.1827865776, 1.3194792169, 0.4619397663,
    0.8660254038, 1.2552931065, 0.3535533906, 0.4174197128, 1.0000000000,
    0.1913417162, -0.0947343455, 0.5924659585, -0.0000000000, -0.5924659585,
    0.0947343455, -0.1913417162, -1.0000000000, -0.4174197128, -0.3535533906,
    -1.2552931065, -0.8660254038, -0.4619397663, -1.3194792169, -1.1827865776,
    -0.5000000000, -1.1827865776, -1.3194792169, -0.4619397663, -0.8660254038,
    -1.2552931065, -0.3535533906, -0.4174197128, -1.0000000000, -0.1913417162,
    0.0947343455, -0.5924659585, 0.0000000000, 0.5924659585, -0.0947343455,
    0.1913417162, 1.0000000000, 0.4174197128, 0.3535533906, 1.2552931065,
    0.8660254038, 0.4619397663, 1.3194792169, 1.1827865776, 0.5000000000,
    1.1827865776, 1.3194792169, 0.4619397663, 0.8660254038, 1.2552931065,
    0.3535533906, 0.4174197128, 1.0000000000, 0.1913417162, -0.0947343455,
    0.5924659585, -0.0000000000, -0.5924659585, 0.0947343455, -0.1913417162,
    -1.0000000000, -0.4174197128, -0.3535533906, -1.2552931065, -0.8660254038,
    -0.4619397663, -1.3194792169, -1.1827865776, -0.5000000000, -1.1827865776,
    -1.3194792169, -0.4619397663, -0.8660254038, -1.2552931065, -0.3535533906,
    -0.4174197128, -1.0000000000, -0.1913417162, 0.0947343455, -0.5924659585,
    -0.0000000000, 0.5924659585, -0.0947343455, 0.1913417162, 1.0000000000,
    0.4174197128, 0.3535533906, 1.2552931065, 0.8660254038, 0.4619397663,
    1.3194792169, 1.1827865776, 0.5000000000, 1.1827865776, 1.3194792169,
    0.4619397663, 0.8660254038, 1.2552931065, 0.3535533906, 0.4174197128,
    1.0000000000, 0.1913417162, -0.0947343455, 0.5924659585, 0.0000000000,
    -0.5924659585, 0.0947343455, -0.1913417162, -1.0000000000, -0.4174197128,
    -0.3535533906, -1.2552931065, -0.8660254038, -0.4619397663, -1.3194792169,
    -1.1827865776, -0.5000000000, -1.1827865776, -1.3194792169, -0.4619397663,
    -0.8660254038, -1.2552931065, -0.3535533906, -0.4174197128, -1.0000000000,
    -0.1913417162, 0.0947343455, -0.5924659585, -0.0000000000, 0.5924659585,
    -0.0947343455, 0.1913417162, 1.0000000000, 0.4174197128, 0.3535533906,
    1.2552931065, 0.8660254038, 0.4619397663, 1.3194792169, 1.1827865776,
    0.5000000000, 1.1827865776, 1.3194792169, 0.4619397663, 0.8660254038,
    1.2552931065, 0.3535533906, 0.4174197128, 1.0000000000, 0.1913417162,
    -0.0947343455, 0.5924659585, 0.0000000000, -0.5924659585, 0.0947343455,
    -0.1913417162, -1.0000000000, -0.4174197128, -0.3535533906, -1.2552931065,
];
