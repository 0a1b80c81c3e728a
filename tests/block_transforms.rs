#![cfg(all(feature = "interpolation", feature = "gain-ramp"))]

use blockfx::gain::{RampWindow, SIGNAL_LENGTH, Softness, target_gain};
use blockfx::interpolation::{FACTOR, INPUT_LENGTH, OUTPUT_LENGTH};
use blockfx::{BlockError, interpolate, soft_amp_increase, try_soft_amp_increase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 500;

fn random_block(rng: &mut StdRng) -> [f32; INPUT_LENGTH] {
    let mut block = [0.0f32; INPUT_LENGTH];
    for sample in block.iter_mut() {
        *sample = rng.gen_range(-1.0..1.0);
    }
    block
}

#[test]
fn test_interpolate_keeps_anchors() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..TRIALS {
        let input = random_block(&mut rng);
        let mut output = [0.0f32; OUTPUT_LENGTH];

        assert!(interpolate(&input, &mut output));
        for (i, &sample) in input.iter().enumerate() {
            assert_eq!(output[i * FACTOR], sample);
        }
    }
}

#[test]
fn test_interpolate_segments_follow_direction() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..TRIALS {
        let input = random_block(&mut rng);
        let mut output = [0.0f32; OUTPUT_LENGTH];
        assert!(interpolate(&input, &mut output));

        for i in 1..INPUT_LENGTH {
            let segment = &output[i * FACTOR - 3..=i * FACTOR];
            if input[i - 1] <= input[i] {
                assert!(segment.windows(2).all(|w| w[0] <= w[1]), "{:?}", segment);
            } else {
                assert!(segment.windows(2).all(|w| w[0] >= w[1]), "{:?}", segment);
            }
        }
    }
}

#[test]
fn test_interpolate_tail_follows_last_segment() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let input = random_block(&mut rng);
        let mut output = [0.0f32; OUTPUT_LENGTH];
        assert!(interpolate(&input, &mut output));

        let tail = &output[OUTPUT_LENGTH - 4..];
        if input[INPUT_LENGTH - 2] <= input[INPUT_LENGTH - 1] {
            assert!(tail.windows(2).all(|w| w[0] <= w[1]), "{:?}", tail);
        } else {
            assert!(tail.windows(2).all(|w| w[0] >= w[1]), "{:?}", tail);
        }
    }
}

#[test]
fn test_interpolate_constant_blocks() {
    for value in [0.0f32, 1.0, -0.25, 1234.5] {
        let input = [value; INPUT_LENGTH];
        let mut output = [f32::NAN; OUTPUT_LENGTH];

        assert!(interpolate(&input, &mut output));
        assert!(output.iter().all(|&s| s == value));
    }
}

#[test]
fn test_interpolate_end_to_end_ramp() {
    let input: Vec<f32> = (0..16).map(|i| i as f32).collect();
    let mut output = vec![0.0f32; 64];

    assert!(interpolate(&input, &mut output));
    assert_eq!(output[0], 0.0);
    assert_eq!(output[4], 1.0);
    assert_eq!(output[8], 2.0);
    for pair in output.windows(2) {
        assert!((pair[1] - pair[0] - 0.25).abs() < 1e-6);
    }
}

#[test]
fn test_soft_amp_increase_regions() {
    let mut rng = StdRng::seed_from_u64(1234);
    let gain = target_gain();
    for _ in 0..TRIALS {
        let percent = rng.gen_range(1..=100);
        let original: Vec<i32> = (0..SIGNAL_LENGTH)
            .map(|_| rng.gen_range(-32768..=32767))
            .collect();
        let mut block = original.clone();

        assert!(soft_amp_increase(&mut block, percent));

        let window = RampWindow::for_softness(Softness::new(percent).unwrap());
        assert_eq!(&block[..window.start()], &original[..window.start()]);
        for i in window.end()..SIGNAL_LENGTH {
            assert_eq!(block[i], (original[i] as f64 * gain).round() as i32);
        }
        for i in window.start()..window.end() {
            let factor = window.factor_at(i, gain);
            assert!((1.0..gain).contains(&factor));
            assert_eq!(block[i], (original[i] as f64 * factor).round() as i32);
        }
    }
}

#[test]
fn test_soft_amp_increase_rejects_without_writing() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..TRIALS {
        let percent = if rng.r#gen::<bool>() {
            rng.gen_range(i32::MIN..=0)
        } else {
            rng.gen_range(101..=i32::MAX)
        };
        let original: Vec<i32> = (0..SIGNAL_LENGTH).map(|_| rng.r#gen()).collect();
        let mut block = original.clone();

        assert_eq!(
            try_soft_amp_increase(&mut block, percent),
            Err(BlockError::SoftnessOutOfRange(percent))
        );
        assert_eq!(block, original);
    }
}

#[test]
fn test_disjoint_buffers_across_threads() {
    let mut float_blocks: Vec<([f32; INPUT_LENGTH], [f32; OUTPUT_LENGTH])> = (0..8)
        .map(|n| ([n as f32; INPUT_LENGTH], [0.0; OUTPUT_LENGTH]))
        .collect();
    let mut int_blocks: Vec<[i32; SIGNAL_LENGTH]> = (0..8).map(|_| [1000; SIGNAL_LENGTH]).collect();

    std::thread::scope(|scope| {
        for (input, output) in float_blocks.iter_mut() {
            scope.spawn(move || assert!(interpolate(&input[..], &mut output[..])));
        }
        for block in int_blocks.iter_mut() {
            scope.spawn(move || assert!(soft_amp_increase(block, 50)));
        }
    });

    for (n, (_, output)) in float_blocks.iter().enumerate() {
        assert!(output.iter().all(|&s| s == n as f32));
    }
    for block in &int_blocks {
        assert_eq!(block[0], 1000);
        assert_eq!(block[SIGNAL_LENGTH - 1], 3981);
    }
}
