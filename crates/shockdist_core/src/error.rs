use std::fmt;

use crate::model::SectorId;

/// Errors raised when a dataset cannot support a density estimate
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    Empty,
    NonFiniteIncome { index: usize, income: f64 },
    NonPositiveWeight { index: usize, weight: f64 },
    /// All incomes are equal, the KDE would collapse to a spike
    DegenerateIncome,
    /// Variance or bandwidth came out zero or non-finite
    DegenerateBandwidth { bandwidth: f64 },
    /// The estimator produced a NaN or infinite density
    NonFiniteDensity { x: f64 },
    GridTooSmall { points: usize },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "dataset is empty"),
            DatasetError::NonFiniteIncome { index, income } => {
                write!(f, "record {index} has non-finite income {income}")
            }
            DatasetError::NonPositiveWeight { index, weight } => {
                write!(f, "record {index} has non-positive weight {weight}")
            }
            DatasetError::DegenerateIncome => {
                write!(f, "income needs at least 2 distinct values")
            }
            DatasetError::DegenerateBandwidth { bandwidth } => {
                write!(f, "degenerate kernel bandwidth {bandwidth}")
            }
            DatasetError::NonFiniteDensity { x } => {
                write!(f, "density estimate is not finite at x={x}")
            }
            DatasetError::GridTooSmall { points } => {
                write!(f, "evaluation grid needs at least 2 points, got {points}")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// Errors raised while turning user shock input into a `ShockSpec`
#[derive(Debug, Clone, PartialEq)]
pub enum ShockSpecError {
    MissingFactor { sector: SectorId },
    FactorOutOfRange { sector: SectorId, percent: f64 },
    UnknownSector { sector: SectorId },
}

impl fmt::Display for ShockSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShockSpecError::MissingFactor { sector } => {
                write!(f, "sector {sector} is selected but has no shock percentage")
            }
            ShockSpecError::FactorOutOfRange { sector, percent } => write!(
                f,
                "shock percentage {percent} for sector {sector} is outside [0, 100]"
            ),
            ShockSpecError::UnknownSector { sector } => {
                write!(f, "sector {sector} does not exist in the dataset")
            }
        }
    }
}

impl std::error::Error for ShockSpecError {}

/// Errors from a single pipeline invocation
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    InvalidDataset(DatasetError),
    InvalidShockSpec(ShockSpecError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidDataset(e) => write!(f, "invalid dataset: {e}"),
            PipelineError::InvalidShockSpec(e) => write!(f, "invalid shock specification: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::InvalidDataset(e) => Some(e),
            PipelineError::InvalidShockSpec(e) => Some(e),
        }
    }
}

impl From<DatasetError> for PipelineError {
    fn from(err: DatasetError) -> Self {
        PipelineError::InvalidDataset(err)
    }
}

impl From<ShockSpecError> for PipelineError {
    fn from(err: ShockSpecError) -> Self {
        PipelineError::InvalidShockSpec(err)
    }
}

/// Errors raised while reading a dataset from delimited text
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    MissingHeader,
    MissingColumn(&'static str),
    Parse {
        line: usize,
        column: &'static str,
        value: String,
    },
    Dataset(DatasetError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "i/o error: {e}"),
            LoadError::MissingHeader => write!(f, "input has no header row"),
            LoadError::MissingColumn(name) => write!(f, "header is missing column '{name}'"),
            LoadError::Parse {
                line,
                column,
                value,
            } => write!(f, "line {line}: cannot parse {column} from '{value}'"),
            LoadError::Dataset(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<DatasetError> for LoadError {
    fn from(err: DatasetError) -> Self {
        LoadError::Dataset(err)
    }
}

/// Errors from synthetic dataset generation
#[derive(Debug, Clone, PartialEq)]
pub enum SyntheticError {
    InvalidDistributionParameters {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    InvalidConfig(&'static str),
    Dataset(DatasetError),
}

impl fmt::Display for SyntheticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntheticError::InvalidDistributionParameters {
                mean,
                std_dev,
                reason,
            } => write!(
                f,
                "invalid income distribution (mean={mean}, std_dev={std_dev}): {reason}"
            ),
            SyntheticError::InvalidConfig(msg) => write!(f, "invalid synthetic config: {msg}"),
            SyntheticError::Dataset(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SyntheticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntheticError::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatasetError> for SyntheticError {
    fn from(err: DatasetError) -> Self {
        SyntheticError::Dataset(err)
    }
}
