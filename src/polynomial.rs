use bc_rand::RandomNumberGenerator;

use crate::field::FieldElement;

/// `f(x) = a0 + a1*x + ... + ad*x^d` over GF(p).
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// A polynomial of the given degree whose constant term is `constant` and
    /// whose remaining coefficients are drawn independently from `rng`.
    pub fn random(degree: usize, constant: FieldElement, rng: &mut impl RandomNumberGenerator) -> Self {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(constant);
        coefficients.extend((0..degree).map(|_| FieldElement::random(rng)));
        Self { coefficients }
    }

    /// Horner's rule, reducing after every step.
    pub fn evaluate(&self, x: &FieldElement) -> FieldElement {
        self.coefficients
            .iter()
            .rev()
            .fold(FieldElement::zero(), |acc, coefficient| &(&acc * x) + coefficient)
    }
}
