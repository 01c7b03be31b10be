//! Plays a one-second 440 Hz tone, looped for three seconds.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sinetone::{AudioFormat, ToneSpec, apply_edge_fade, play_looping, synthesize};

/// One second of audio at the default sample rate.
const FRAMES: usize = 44100;

const PLAY_FOR: Duration = Duration::from_secs(3);

fn main() -> anyhow::Result<()> {
    let format = AudioFormat::default();
    let mut buffer = synthesize(ToneSpec::default(), format, FRAMES)?;
    apply_edge_fade(&mut buffer);

    play_looping(Arc::new(buffer), PLAY_FOR).context("failed to start audio playback")?;
    Ok(())
}
