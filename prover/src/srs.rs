use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::{rand::Rng, UniformRand, Zero};
use crossbeam_channel::{bounded, Receiver, Sender};
use kzg_pop_primitives::{
    consts::SIZE_OF_G1_AFFINE_COMPRESSED,
    errors::{InputError, PossessionError},
    helpers,
    traits::ReadPointFromBytes,
    types::VerifierKey,
};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use tracing::{debug, warn};

/// Public parameters of the commitment scheme: `[tau^i]G1` for
/// `i < g1.len()` and `[tau]G2`.
///
/// A setup of `n` G1 points commits to polynomials of degree below `n`.
/// It is immutable once built and can be shared by any number of commit,
/// prove and verify calls.
#[derive(Debug, PartialEq, Clone)]
pub struct TrustedSetup {
    // G1 powers are stored in monomial form, ready to be used for commitments
    // with polynomials in coefficient form.
    pub g1: Vec<G1Affine>,
    pub g2_tau: G2Affine,
}

impl TrustedSetup {
    /// Generates a setup of `size` G1 points from a freshly sampled tau.
    ///
    /// Whoever controls `rng` learns tau and can forge proofs; this is meant
    /// for tests and single party demos, not as a ceremony.
    ///
    /// # Errors
    /// [PossessionError::SetupGenerationError] if `size` is zero or the
    /// sampled tau is zero.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PossessionError> {
        if size == 0 {
            return Err(PossessionError::SetupGenerationError(
                "setup size must be at least 1".to_string(),
            ));
        }
        warn!(size, "generating a trusted setup locally, tau is not discarded by a ceremony");
        let tau = Fr::rand(rng);
        Self::from_tau(size, &tau)
    }

    /// Builds the setup for a known `tau`.
    pub fn from_tau(size: usize, tau: &Fr) -> Result<Self, PossessionError> {
        if size == 0 {
            return Err(PossessionError::SetupGenerationError(
                "setup size must be at least 1".to_string(),
            ));
        }
        if tau.is_zero() {
            return Err(PossessionError::SetupGenerationError(
                "tau must not be zero".to_string(),
            ));
        }

        let generator = G1Affine::generator();
        let powers = helpers::compute_powers(tau, size);
        let g1_projective: Vec<G1Projective> =
            powers.par_iter().map(|power| generator * *power).collect();
        let g1 = G1Projective::normalize_batch(&g1_projective);
        let g2_tau = (G2Affine::generator() * *tau).into_affine();

        debug!(size, "trusted setup generated");
        Ok(Self { g1, g2_tau })
    }

    /// Number of G1 points.
    pub fn len(&self) -> usize {
        self.g1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1.is_empty()
    }

    /// Highest polynomial degree this setup can commit to.
    pub fn max_degree(&self) -> usize {
        self.g1.len().saturating_sub(1)
    }

    pub fn verifier_key(&self) -> VerifierKey {
        VerifierKey::new(self.g2_tau)
    }

    /// Fails with [InputError::SetupTooSmall] unless the setup holds at
    /// least `coefficient_count` G1 points.
    pub fn ensure_capacity(&self, coefficient_count: usize) -> Result<(), InputError> {
        if coefficient_count > self.g1.len() {
            return Err(InputError::SetupTooSmall {
                required: coefficient_count,
                available: self.g1.len(),
            });
        }
        Ok(())
    }

    /// Writes the G1 points (32 bytes each, compressed big-endian,
    /// concatenated) to `path_to_g1_points` and `[tau]G2` (64 bytes) to
    /// `path_to_g2_tau`.
    pub fn save(&self, path_to_g1_points: &str, path_to_g2_tau: &str) -> Result<(), PossessionError> {
        let file = File::create(path_to_g1_points).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        for point in &self.g1 {
            writer
                .write_all(&helpers::g1_to_bytes_be(point)?)
                .map_err(io_error)?;
        }
        writer.flush().map_err(io_error)?;

        std::fs::write(path_to_g2_tau, self.verifier_key().to_bytes_be()?).map_err(io_error)?;
        debug!(points = self.g1.len(), path_to_g1_points, path_to_g2_tau, "trusted setup saved");
        Ok(())
    }

    /// Loads a setup written by [TrustedSetup::save].
    ///
    /// # Arguments
    ///
    /// * `path_to_g1_points` - The file path to load G1 points from.
    /// * `path_to_g2_tau` - The file holding `[tau]G2`.
    /// * `points_to_load` - The number of G1 points to load, from the start
    ///   of the file.
    ///
    /// # Returns
    ///
    /// * `Result<TrustedSetup, PossessionError>` - The loaded setup or an error.
    pub fn load(
        path_to_g1_points: &str,
        path_to_g2_tau: &str,
        points_to_load: usize,
    ) -> Result<Self, PossessionError> {
        if points_to_load == 0 {
            return Err(PossessionError::GenericError(
                "Number of points to load must be at least 1.".to_string(),
            ));
        }

        let g2_bytes = std::fs::read(path_to_g2_tau).map_err(io_error)?;
        let g2_tau = VerifierKey::from_bytes_be(&g2_bytes)?.g2_tau;
        let g1 = Self::parallel_read_g1_points(path_to_g1_points.to_owned(), points_to_load)?;

        debug!(points = g1.len(), path_to_g1_points, "trusted setup loaded");
        Ok(Self { g1, g2_tau })
    }

    /// Parses the chunks arriving on `receiver`. Stops at the first chunk
    /// that is not a valid point.
    fn process_chunks<T>(receiver: Receiver<(Vec<u8>, usize)>) -> Result<Vec<(T, usize)>, PossessionError>
    where
        T: ReadPointFromBytes,
    {
        receiver
            .iter()
            .map(|(chunk, position)| {
                T::read_point_from_bytes_native_compressed_be(&chunk)
                    .map(|point| (point, position))
                    .map_err(|e| {
                        PossessionError::SerializationError(format!(
                            "invalid point at position {}: {}",
                            position, e
                        ))
                    })
            })
            .collect()
    }

    /// Reads G1 points in parallel: one reader thread streams fixed size
    /// chunks to one parser per cpu, and the parsed points are reordered by
    /// their position in the file.
    fn parallel_read_g1_points(
        file_path: String,
        points_to_load: usize,
    ) -> Result<Vec<G1Affine>, PossessionError> {
        let (sender, receiver) = bounded::<(Vec<u8>, usize)>(1000);

        // Spawn the reader thread
        let reader_handle = std::thread::spawn(move || -> io::Result<()> {
            Self::read_file_chunks(&file_path, sender, SIZE_OF_G1_AFFINE_COMPRESSED, points_to_load)
        });

        let num_workers = num_cpus::get();

        let workers: Vec<_> = (0..num_workers)
            .map(|_| {
                let receiver = receiver.clone();
                std::thread::spawn(move || Self::process_chunks::<G1Affine>(receiver))
            })
            .collect();
        // Only the workers hold receivers now, so the reader fails instead of
        // blocking if every worker has stopped.
        drop(receiver);

        let mut all_points = Vec::with_capacity(points_to_load);
        let mut worker_error = None;
        for worker in workers {
            match worker.join() {
                Ok(Ok(points)) => all_points.extend(points),
                Ok(Err(e)) => worker_error = Some(e),
                Err(_) => {
                    worker_error = Some(PossessionError::GenericError(
                        "Worker thread panicked.".to_string(),
                    ))
                },
            }
        }

        // Wait for the reader thread to finish
        match reader_handle.join() {
            Ok(Ok(())) => {},
            Ok(Err(e)) => {
                // a broken channel only means a worker failed first
                if let Some(worker_error) = worker_error {
                    return Err(worker_error);
                }
                return Err(io_error(e));
            },
            Err(_) => {
                return Err(PossessionError::GenericError(
                    "Reader thread panicked.".to_string(),
                ))
            },
        }
        if let Some(e) = worker_error {
            return Err(e);
        }

        if all_points.len() != points_to_load {
            return Err(PossessionError::GenericError(format!(
                "Expected {} points, but got {}.",
                points_to_load,
                all_points.len()
            )));
        }

        // Sort by original position to maintain order
        all_points.sort_by_key(|&(_, position)| position);

        Ok(all_points.into_iter().map(|(point, _)| point).collect())
    }

    /// Reads up to `num_points` chunks of `point_size` bytes and sends them
    /// with their position through `sender`. A short file ends the stream
    /// early; the caller detects the missing points.
    fn read_file_chunks(
        file_path: &str,
        sender: Sender<(Vec<u8>, usize)>,
        point_size: usize,
        num_points: usize,
    ) -> io::Result<()> {
        let file = File::open(file_path)?;
        let mut reader = BufReader::new(file);

        for position in 0..num_points {
            let mut buffer = vec![0u8; point_size];
            match reader.read_exact(&mut buffer) {
                Ok(()) => {},
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            }
            sender
                .send((buffer, position))
                .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "all point parsers stopped"))?;
        }
        Ok(())
    }
}

fn io_error(e: io::Error) -> PossessionError {
    PossessionError::IoError(e.to_string())
}
