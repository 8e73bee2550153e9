pub mod bayes;
pub mod combinatorics;
pub mod first_passage;

pub use self::{
    bayes::{bayes_pdf, bayes_pmf, Quadrature},
    combinatorics::{binomial, power},
    first_passage::{first_passage_pdf, first_passage_pmf},
};
