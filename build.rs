use vergen::EmitBuilder;

// Emits build and git metadata used in the startup log line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build() // Emit build-related instructions (timestamp, rustc, etc.)
        .all_git() // Emit git-related instructions (sha, commit timestamp, etc.)
        .emit()?;

    Ok(())
}
