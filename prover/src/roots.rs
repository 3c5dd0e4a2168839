use crossbeam_channel::bounded;
use kzg_pop_primitives::{
    data::DataBlob,
    digest::DigestKind,
    errors::{InputError, PossessionError},
    roots::{self, Root, RootSet},
    sampling::SampleSet,
};
use tracing::debug;

/// Derives the roots of `samples` on one worker thread per cpu.
///
/// Every sampled index is an independent unit of work sent over a channel;
/// workers hash their data points and hand back `(root, position)` pairs
/// which are reordered by sample position, so the result equals
/// [roots::derive_roots]. The set is returned whole or not at all: an
/// invalid index or a panicking worker discards every partial result.
pub fn derive_roots_parallel(
    blob: &DataBlob,
    samples: &SampleSet,
    digest: DigestKind,
) -> Result<RootSet, PossessionError> {
    if samples.is_empty() {
        return Err(InputError::InvalidSampleCount(0).into());
    }

    let num_workers = num_cpus::get().clamp(1, samples.len());
    // Room for every index, so sending never blocks.
    let (sender, receiver) = bounded::<(usize, usize)>(samples.len());

    let mut all_roots = std::thread::scope(|scope| -> Result<Vec<(Root, usize)>, PossessionError> {
        let workers: Vec<_> = (0..num_workers)
            .map(|_| {
                let receiver = receiver.clone();
                scope.spawn(move || -> Result<Vec<(Root, usize)>, PossessionError> {
                    receiver
                        .iter()
                        .map(|(index, position)| {
                            roots::derive_root(blob, index, digest).map(|root| (root, position))
                        })
                        .collect()
                })
            })
            .collect();
        drop(receiver);

        // Every worker has exited once a send fails; their errors are
        // collected below.
        let mut workers_stopped = false;
        for (position, &index) in samples.iter().enumerate() {
            if sender.send((index, position)).is_err() {
                workers_stopped = true;
                break;
            }
        }
        drop(sender);

        // Join every worker before deciding, so no thread outlives a failure.
        let mut all_roots = Vec::with_capacity(samples.len());
        let mut first_error = None;
        for worker in workers {
            match worker.join() {
                Ok(Ok(roots)) => all_roots.extend(roots),
                Ok(Err(e)) => {
                    first_error.get_or_insert(e);
                },
                Err(_) => {
                    first_error.get_or_insert(PossessionError::GenericError(
                        "Worker thread panicked.".to_string(),
                    ));
                },
            }
        }
        match first_error {
            Some(e) => Err(e),
            None if workers_stopped => Err(PossessionError::GenericError(
                "root derivation workers stopped".to_string(),
            )),
            None => Ok(all_roots),
        }
    })?;

    if all_roots.len() != samples.len() {
        return Err(PossessionError::GenericError(format!(
            "Expected {} roots, but got {}.",
            samples.len(),
            all_roots.len()
        )));
    }

    // Sort by sample position to maintain order
    all_roots.sort_by_key(|&(_, position)| position);
    debug!(roots = all_roots.len(), workers = num_workers, "derived roots");

    Ok(RootSet::new(all_roots.into_iter().map(|(root, _)| root).collect()))
}
