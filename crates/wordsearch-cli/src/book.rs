use rayon::prelude::*;
use wordsearch_generator::{
    GenerateError, GeneratedPuzzle, PuzzleGenerator, PuzzleRequest, PuzzleSeed,
};

/// Generates every request of a batch in parallel.
///
/// The `i`-th puzzle is generated from `base.derive(i)`, so the batch is reproducible
/// from `base` regardless of scheduling. Results keep the order of `requests`.
pub(crate) fn generate_book(
    generator: &PuzzleGenerator,
    requests: &[PuzzleRequest],
    base: PuzzleSeed,
) -> Vec<Result<GeneratedPuzzle, GenerateError>> {
    requests
        .par_iter()
        .enumerate()
        .map(|(i, request)| generator.generate_with_seed(request, base.derive(i as u64)))
        .collect()
}

/// Drops the requests that failed validation, logging why.
pub(crate) fn keep_generated(
    requests: &[PuzzleRequest],
    results: Vec<Result<GeneratedPuzzle, GenerateError>>,
) -> Vec<GeneratedPuzzle> {
    requests
        .iter()
        .zip(results)
        .filter_map(|(request, result)| match result {
            Ok(generated) => {
                for word in generated.puzzle.failed_words() {
                    log::warn!("could not place {word:?} in puzzle {:?}", request.title);
                }
                Some(generated)
            }
            Err(err) => {
                log::warn!("Puzzle '{}' skipped: {err}", request.title);
                None
            }
        })
        .collect()
}
