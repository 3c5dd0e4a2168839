use kzg_pop::{
    primitives::{
        config::PossessionConfig,
        data::DataBlob,
        digest::DigestKind,
        errors::{InputError, PossessionError},
    },
    prover::srs::TrustedSetup,
    session::{PossessionSession, SessionError},
};
use std::env;
use std::process::ExitCode;
use tracing::{error, info};

/// The sample position the demo challenges, reduced modulo the sample count.
const QUERIED_POSITION: usize = 42;

fn print_usage() {
    eprintln!("Usage: prove_file <path> [sample_count] [keccak256|sha256]");
    eprintln!("  sample_count defaults to 100, the digest to keccak256");
}

fn parse_config(args: &[String]) -> Option<PossessionConfig> {
    let mut config = PossessionConfig::default();
    if let Some(count) = args.first() {
        config.sample_count = count.parse().ok()?;
    }
    if let Some(name) = args.get(1) {
        config.digest = DigestKind::from_name(&name.to_lowercase())?;
    }
    Some(config)
}

fn run(path: &str, config: PossessionConfig) -> Result<bool, SessionError> {
    config.validate().map_err(PossessionError::from)?;

    let content = std::fs::read(path).map_err(|e| PossessionError::IoError(e.to_string()))?;
    if content.is_empty() {
        return Err(PossessionError::from(InputError::EmptyBlob).into());
    }
    let blob = DataBlob::new(path, content);

    let setup = TrustedSetup::generate(config.required_setup_size(), &mut rand::thread_rng())?;
    let vk = setup.verifier_key();

    let mut session = PossessionSession::new(&setup, config, blob)?;
    let position = QUERIED_POSITION % config.sample_count;
    let verified = session.run(position, &vk)?;

    if let (Some(commitment), Some(proof)) = (session.commitment(), session.proof()) {
        info!(
            commitment = ?commitment.0,
            index = proof.index,
            root = ?proof.z.as_fr(),
            "proof for sample position {}",
            position
        );
    }
    Ok(verified)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        print_usage();
        return ExitCode::FAILURE;
    };
    let Some(config) = parse_config(&args[1..]) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(path, config) {
        Ok(true) => {
            info!(path, "possession established");
            ExitCode::SUCCESS
        },
        Ok(false) => {
            error!(path, "possession not established");
            ExitCode::FAILURE
        },
        Err(e) => {
            error!(path, error = %e, "possession check failed");
            ExitCode::FAILURE
        },
    }
}
