use crate::{field::FieldElement, ShamirError};

/// Calculate the lagrange basis coefficients for the lagrange polynomial
/// defined by the x coordinates `xs` at the value `x`.
///
/// After the function runs, the returned values satisfy:
///
/// ```text
///                ---     (x - xs[j])
///   values[i] =  | |   ---------------
///              j != i  (xs[i] - xs[j])
/// ```
///
/// Repeated x coordinates make a denominator zero and fail with
/// [`ShamirError::ZeroInverse`].
pub fn lagrange_basis(xs: &[FieldElement], x: &FieldElement) -> Result<Vec<FieldElement>, ShamirError> {
    xs.iter()
        .enumerate()
        .map(|(i, xi)| {
            let mut numerator = FieldElement::one();
            let mut denominator = FieldElement::one();
            for (j, xj) in xs.iter().enumerate() {
                if i == j {
                    continue;
                }
                numerator = &numerator * &(x - xj);
                denominator = &denominator * &(xi - xj);
            }
            Ok(&numerator * &denominator.inverse()?)
        })
        .collect()
}

/// Combine y values with basis coefficients from [`lagrange_basis`].
pub fn interpolate<'a>(basis: &[FieldElement], ys: impl IntoIterator<Item = &'a FieldElement>) -> FieldElement {
    basis
        .iter()
        .zip(ys)
        .fold(FieldElement::zero(), |acc, (l, y)| &acc + &(l * y))
}
