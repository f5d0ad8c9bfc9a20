use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    #[error("token {index} ({token:?}) is not a finite number")]
    Parse { index: usize, token: String },
    #[error("expected an even number of values to split into features and targets, got {len}")]
    Shape { len: usize },
    #[error("{features} feature values but {targets} target values")]
    LengthMismatch { features: usize, targets: usize },
}

/// Index-aligned feature and target columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTargetSet {
    features: Vec<f64>,
    targets: Vec<f64>,
}

impl FeatureTargetSet {
    pub fn new(features: Vec<f64>, targets: Vec<f64>) -> Result<Self, SplitError> {
        if features.len() != targets.len() {
            return Err(SplitError::LengthMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }
        Ok(Self { features, targets })
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.features.iter().copied().zip(self.targets.iter().copied())
    }
}

/// Splits a flat token list at its midpoint: the first half are feature
/// values, the second half the matching target values.
pub fn split<S: AsRef<str>>(raw: &[S]) -> Result<FeatureTargetSet, SplitError> {
    if raw.len() % 2 != 0 {
        return Err(SplitError::Shape { len: raw.len() });
    }

    let values = raw
        .iter()
        .enumerate()
        .map(|(index, token)| parse_token(index, token.as_ref()))
        .collect::<Result<Vec<f64>, _>>()?;

    let n = values.len() / 2;
    let targets = values[n..].to_vec();
    let mut features = values;
    features.truncate(n);
    debug!("split {} tokens into {} feature/target pairs", raw.len(), n);

    Ok(FeatureTargetSet { features, targets })
}

fn parse_token(index: usize, token: &str) -> Result<f64, SplitError> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(SplitError::Parse { index, token: token.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_halves() {
        let raw = ["1", "2", "3", "4", "5", "6"];
        let set = split(&raw).unwrap();

        assert_eq!(set.features(), &[1., 2., 3.]);
        assert_eq!(set.targets(), &[4., 5., 6.]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_split_keeps_order() {
        let raw = vec!["3.5".to_string(), "-1".into(), "0.25".into(), "1e2".into()];
        let set = split(&raw).unwrap();

        assert_eq!(set.features(), &[3.5, -1.]);
        assert_eq!(set.targets(), &[0.25, 100.]);
        assert_eq!(set.points().collect::<Vec<_>>(), vec![(3.5, 0.25), (-1., 100.)]);
    }

    #[test]
    fn test_split_odd_len() {
        let raw = ["1", "2", "3", "4", "5"];

        assert_eq!(split(&raw), Err(SplitError::Shape { len: 5 }));
    }

    #[test]
    // shape is checked before any token is parsed
    fn test_split_odd_len_with_garbage() {
        let raw = ["1", "x", "3"];

        assert_eq!(split(&raw), Err(SplitError::Shape { len: 3 }));
    }

    #[test]
    fn test_split_bad_token() {
        let raw = ["1", "2", "abc", "4"];

        assert_eq!(split(&raw), Err(SplitError::Parse { index: 2, token: "abc".into() }));
    }

    #[test]
    fn test_split_non_finite() {
        let raw = ["1", "nan", "3", "4"];
        assert!(matches!(split(&raw), Err(SplitError::Parse { index: 1, .. })));

        let raw = ["inf", "2"];
        assert!(matches!(split(&raw), Err(SplitError::Parse { index: 0, .. })));
    }

    #[test]
    fn test_split_trims_whitespace() {
        let raw = [" 1", "2 "];
        let set = split(&raw).unwrap();

        assert_eq!(set.features(), &[1.]);
        assert_eq!(set.targets(), &[2.]);
    }

    #[test]
    fn test_split_empty() {
        let raw: [&str; 0] = [];
        let set = split(&raw).unwrap();

        assert!(set.is_empty());
        assert!(set.targets().is_empty());
    }

    #[test]
    fn test_new_mismatch() {
        let err = FeatureTargetSet::new(vec![1., 2., 3., 4.], vec![1., 2.]).unwrap_err();

        assert_eq!(err, SplitError::LengthMismatch { features: 4, targets: 2 });
        assert_eq!(err.to_string(), "4 feature values but 2 target values");
        assert!(FeatureTargetSet::new(vec![1.], vec![2.]).is_ok());
    }
}
