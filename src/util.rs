
//! Various utility functions.

/// Zips two arrays of the same length together, using the given
/// function.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let res = left.into_iter().zip(right)
    .map(|(x, y)| f(x, y))
    .collect::<Vec<_>>()
    .try_into();
  match res {
    Ok(res) => res,
    Err(_) => unreachable!("zip_with preserves array length"),
  }
}

/// Maps a function over an array, short-circuiting on the first
/// `None`.
pub fn try_map_array<const C: usize, T, U, F>(arr: &[T; C], f: F) -> Option<[U; C]>
where F: FnMut(&T) -> Option<U> {
  let res: Vec<U> = arr.iter().map(f).collect::<Option<_>>()?;
  res.try_into().ok()
}
