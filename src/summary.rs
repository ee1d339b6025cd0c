//! Descriptive statistics over a finished sample
//!
//! All statistics are population statistics computed after the sample has been filtered, so the
//! variance divides by `n` rather than `n - 1`.
use std::cmp::Ordering;
use std::collections::HashMap;

use num_traits::{Float, FromPrimitive};

use crate::bytes::{self, ToBytes};
use crate::utils::midpoint;

/// Which values to report as the mode when several share the maximal count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModePolicy {
    /// The value that appears first in the input among those with the maximal count
    Single,
    /// Every value with the maximal count, ordered by first appearance
    All,
}

impl Default for ModePolicy {
    fn default() -> Self {
        ModePolicy::Single
    }
}

/// Summary statistics of a non-empty sample
///
/// # Examples
///
/// ```
/// use text_stats::{ModePolicy, Summary};
///
/// let nums: [f64; 4] = [1.0, 2.0, 2.0, 3.0];
/// let summ = Summary::new(nums.iter().copied(), ModePolicy::Single).unwrap();
/// assert_eq!(4, summ.count());
/// assert_eq!(2.0, summ.mean());
/// assert_eq!(2.0, summ.median());
/// assert_eq!(&[2.0], summ.mode());
/// assert_eq!(0.5, summ.variance());
/// assert!((0.7071068 - summ.standard_deviation()).abs() < 1.0e-6);
/// ```
///
/// ```
/// let summ = text_stats::Summary::<f64>::new(std::iter::empty(), Default::default());
/// assert!(summ.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Summary<T> {
    count: usize,
    mean: T,
    median: T,
    modes: Vec<T>,
    mode_count: usize,
    variance: T,
    policy: ModePolicy,
}

impl<T: Float + FromPrimitive + ToBytes> Summary<T> {
    /// Compute every statistic at once, `None` for an empty sample
    pub fn new<I>(data: I, policy: ModePolicy) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut data: Vec<T> = data.into_iter().collect();
        let mean = mean(data.iter().copied())?;
        let variance = shifted_variance(&data)?;
        let (modes, mode_count) = tied_modes(data.iter().copied())?;
        sort(&mut data);
        let median = sorted_median(&data)?;
        Some(Summary {
            count: data.len(),
            mean,
            median,
            modes,
            mode_count,
            variance,
            policy,
        })
    }
}

impl<T: Float> Summary<T> {
    /// Get the number of values
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get the arithmetic mean
    pub fn mean(&self) -> T {
        self.mean
    }

    /// Get the median
    pub fn median(&self) -> T {
        self.median
    }

    /// Get the mode according to the policy
    ///
    /// This always has at least one element, and exactly one under [`ModePolicy::Single`].
    ///
    /// # Examples
    ///
    /// ```
    /// use text_stats::{ModePolicy, Summary};
    ///
    /// let nums = [3.0, 1.0, 1.0, 3.0, 2.0];
    /// let single = Summary::new(nums.iter().copied(), ModePolicy::Single).unwrap();
    /// assert_eq!(&[3.0], single.mode());
    /// let all = Summary::new(nums.iter().copied(), ModePolicy::All).unwrap();
    /// assert_eq!(&[3.0, 1.0], all.mode());
    /// ```
    pub fn mode(&self) -> &[T] {
        match self.policy {
            ModePolicy::Single => &self.modes[..1],
            ModePolicy::All => &self.modes,
        }
    }

    /// Get the number of times the mode occurred
    pub fn mode_count(&self) -> usize {
        self.mode_count
    }

    /// Get the population variance
    pub fn variance(&self) -> T {
        self.variance
    }

    /// Get the population standard deviation
    pub fn standard_deviation(&self) -> T {
        self.variance.sqrt()
    }

    /// Get the mode policy used for reporting
    pub fn policy(&self) -> ModePolicy {
        self.policy
    }
}

fn sort<T: Float>(data: &mut [T]) {
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

fn sorted_median<T: Float>(sorted: &[T]) -> Option<T> {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        len if len % 2 == 1 => Some(sorted[mid]),
        _ => Some(midpoint(sorted[mid - 1], sorted[mid])),
    }
}

/// Population variance, with squares summed about the first value
///
/// A constant sample gives exactly zero.
fn shifted_variance<T>(data: &[T]) -> Option<T>
where
    T: Float + FromPrimitive,
{
    let shift = *data.first()?;
    let (sum, sum_sq) = data.iter().fold((T::zero(), T::zero()), |(sum, sum_sq), &val| {
        let delta = val - shift;
        (sum + delta, sum_sq + delta * delta)
    });
    let count = T::from_usize(data.len())?;
    Some(((sum_sq - sum * sum / count) / count).max(T::zero()))
}

/// Modes in first appearance order and their shared count
fn tied_modes<T, I>(data: I) -> Option<(Vec<T>, usize)>
where
    T: Float + ToBytes,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T::Bytes, usize> = HashMap::new();
    let mut distinct = Vec::new();
    for val in data {
        let count = counts.entry(bytes::hash_key(val)).or_insert(0);
        if *count == 0 {
            distinct.push(val);
        }
        *count += 1;
    }
    let count_of = |val: &T| counts[&bytes::hash_key(*val)];
    let mode_count = distinct.iter().map(count_of).max()?;
    let modes = distinct
        .into_iter()
        .filter(|val| count_of(val) == mode_count)
        .collect();
    Some((modes, mode_count))
}

/// Get the mean of a set of data
///
/// # Examples:
///
/// ```
/// let nums: [f64; 2] = [2.0, 4.0];
/// let mean = text_stats::mean(nums.iter().copied()).unwrap();
/// assert!((3.0 - mean).abs() < 1.0e-6);
/// ```
///
/// ```
/// assert!(text_stats::mean::<f64, _>(std::iter::empty()).is_none());
/// ```
pub fn mean<T, I>(data: I) -> Option<T>
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    let (count, sum) = data
        .into_iter()
        .fold((0, T::zero()), |(count, sum), val| (count + 1, sum + val));
    match count {
        0 => None,
        _ => Some(sum / T::from_usize(count)?),
    }
}

/// Get the median of a set of data
///
/// An even number of values yields the average of the two central ones.
///
/// # Examples:
///
/// ```
/// let nums = [5.0, 1.0, 3.0];
/// assert_eq!(Some(3.0), text_stats::median(nums.iter().copied()));
/// ```
///
/// ```
/// let nums = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(Some(2.5), text_stats::median(nums.iter().copied()));
/// ```
///
/// ```
/// assert!(text_stats::median::<f64, _>(std::iter::empty()).is_none());
/// ```
pub fn median<T, I>(data: I) -> Option<T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut data: Vec<T> = data.into_iter().collect();
    sort(&mut data);
    sorted_median(&data)
}

/// Get every mode of a set of data, in order of first appearance
///
/// # Examples:
///
/// ```
/// let nums = [2.0, 4.0, 4.0, 2.0, 1.0];
/// assert_eq!(Some(vec![2.0, 4.0]), text_stats::modes(nums.iter().copied()));
/// ```
///
/// ```
/// assert!(text_stats::modes::<f64, _>(std::iter::empty()).is_none());
/// ```
pub fn modes<T, I>(data: I) -> Option<Vec<T>>
where
    T: Float + ToBytes,
    I: IntoIterator<Item = T>,
{
    tied_modes(data).map(|(modes, _)| modes)
}

/// Get the population variance of a set of data
///
/// # Examples:
///
/// ```
/// let nums: [f64; 2] = [2.0, 4.0];
/// assert_eq!(Some(1.0), text_stats::variance(nums.iter().copied()));
/// ```
pub fn variance<T, I>(data: I) -> Option<T>
where
    T: Float + FromPrimitive,
    I: IntoIterator<Item = T>,
{
    let data: Vec<T> = data.into_iter().collect();
    shifted_variance(&data)
}
