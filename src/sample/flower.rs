//! The flower record and the closed sets it draws from.
use serde::{Serialize, Deserialize};

use crate::errors::FloretError;

use std::fmt;
use std::str::FromStr;


/// The three iris species a flower can belong to.
/// The discriminant order matches the `0/1/2` class code
/// of the input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Iris setosa, class code `0`.
    Setosa,
    /// Iris versicolor, class code `1`.
    Versicolor,
    /// Iris virginica, class code `2`.
    Virginica,
}


impl Species {
    /// The number of species.
    pub const COUNT: usize = 3;


    /// Converts the class code of the input format into a species.
    #[inline]
    pub fn from_code(code: u8) -> Result<Self, FloretError> {
        match code {
            0 => Ok(Self::Setosa),
            1 => Ok(Self::Versicolor),
            2 => Ok(Self::Virginica),
            _ => Err(FloretError::InvalidClassCode(code.to_string())),
        }
    }


    /// A stable index in `0..3`, used for class counting.
    #[inline]
    pub fn as_index(self) -> usize {
        match self {
            Self::Setosa     => 0,
            Self::Versicolor => 1,
            Self::Virginica  => 2,
        }
    }


    /// The inverse of [`Species::as_index`].
    /// Calling this with an index outside `0..3` is a programming error.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Setosa,
            1 => Self::Versicolor,
            2 => Self::Virginica,
            _ => unreachable!("species index must be in 0..3"),
        }
    }


    /// The lower-case species name.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::Setosa     => "setosa",
            Self::Versicolor => "versicolor",
            Self::Virginica  => "virginica",
        }
    }
}


impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// The four measured attributes of a flower,
/// in declared split-priority order.
/// When two attributes achieve the same information gain,
/// the one declared earlier wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Sepal length.
    SepalLength,
    /// Sepal width.
    SepalWidth,
    /// Petal length.
    PetalLength,
    /// Petal width.
    PetalWidth,
}


impl Attribute {
    /// All attributes in split-priority order.
    pub const ALL: [Self; 4] = [
        Self::SepalLength,
        Self::SepalWidth,
        Self::PetalLength,
        Self::PetalWidth,
    ];


    /// The conventional short name of the attribute.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Self::SepalLength => "SL",
            Self::SepalWidth  => "SW",
            Self::PetalLength => "PL",
            Self::PetalWidth  => "PW",
        }
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A single labeled measurement:
/// four attribute values and the species of the flower.
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    sepal_length: f64,
    sepal_width:  f64,
    petal_length: f64,
    petal_width:  f64,
    species:      Species,
}


impl Flower {
    /// Construct a flower from its four measurements and species.
    #[inline]
    pub fn new(
        sepal_length: f64,
        sepal_width:  f64,
        petal_length: f64,
        petal_width:  f64,
        species:      Species,
    ) -> Self
    {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
            species,
        }
    }


    /// The value of the given attribute for this flower.
    #[inline]
    pub fn value(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::SepalLength => self.sepal_length,
            Attribute::SepalWidth  => self.sepal_width,
            Attribute::PetalLength => self.petal_length,
            Attribute::PetalWidth  => self.petal_width,
        }
    }


    /// The species of this flower.
    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }
}


impl FromStr for Flower {
    type Err = FloretError;


    /// Parses one input record of the form
    /// `float,float,float,float,int`,
    /// where the trailing integer is the `0/1/2` class code.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields = line.trim().split(',').collect::<Vec<_>>();
        if fields.len() != 5 {
            return Err(FloretError::WrongFieldCount(
                fields.len(), line.to_string()
            ));
        }

        let mut values = [0f64; 4];
        for (value, (field, attribute)) in values.iter_mut()
            .zip(fields.iter().zip(Attribute::ALL))
        {
            let field = field.trim();
            *value = field.parse::<f64>()
                .map_err(|_| FloretError::InvalidFieldValue(
                    field.to_string(), attribute.name().to_string()
                ))?;
        }

        let code = fields[4].trim();
        let species = code.parse::<u8>()
            .map_err(|_| FloretError::InvalidClassCode(code.to_string()))
            .and_then(Species::from_code)?;

        let [sl, sw, pl, pw] = values;
        Ok(Self::new(sl, sw, pl, pw, species))
    }
}


impl fmt::Display for Flower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1},{:.1},{:.1},{:.1},{}",
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
            self.species,
        )
    }
}
