use crate::types::{Number, NumberType, Type, TypeInfo};

#[derive(Debug, Clone)]
pub struct NumberTypeBuilder {
    info: TypeInfo,
    min: Option<Number>,
    max: Option<Number>,
}

impl NumberTypeBuilder {
    pub fn new(supertype: impl Into<String>, name: impl Into<String>) -> Self {
        Self { info: TypeInfo::new(supertype, name), min: None, max: None }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.info.comment = Some(comment.into());
        self
    }

    /// Lower bound; its width is taken from the literal (`i32` for a bare
    /// integer, `f64` for a bare float).
    pub fn min(mut self, min: impl Into<Number>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn build(self) -> Type {
        Type::Number(NumberType { info: self.info, min: self.min, max: self.max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseType;

    #[test]
    fn bounds_keep_their_width() {
        let t = NumberTypeBuilder::new("Int8", "Percent").min(0i8).max(100i8).build();
        assert_eq!(t.kind(), BaseType::Int8);
        let Type::Number(n) = t else { panic!("expected number") };
        assert_eq!(n.min, Some(Number::Int8(0)));
        assert_eq!(n.max, Some(Number::Int8(100)));
    }

    #[test]
    fn derived_number_takes_kind_from_bounds() {
        let t = NumberTypeBuilder::new("Ratio", "Half").max(0.5).build();
        assert_eq!(t.kind(), BaseType::Float64);
        let t = NumberTypeBuilder::new("Ratio", "Unbounded").build();
        assert_eq!(t.kind(), BaseType::Any);
    }
}
