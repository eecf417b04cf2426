//! # statkit
//!
//! Statistical primitives for teaching-oriented calculators.
//!
//! This crate provides the numeric core behind interactive statistics
//! modules: descriptive statistics, combinatorics, probability
//! distributions, price index numbers, time-series decomposition, and
//! seeded Monte Carlo experiments. It knows nothing about forms, charts,
//! or any UI concern; callers parse input and format output.
//!
//! ## Modules
//!
//! - [`stats`] - descriptive statistics (mean, variance, covariance, correlation)
//! - [`combinatorics`] - factorial, permutation, combination
//! - [`special`] - erf, normal pdf/cdf, ln-gamma, z-scores
//! - [`distributions`] - parameterised Normal, Binomial, Poisson
//! - [`regression`] - simple linear regression, both regression lines
//! - [`index_numbers`] - Laspeyres, Paasche, Fisher and friends
//! - [`timeseries`] - trend fitting, moving averages, seasonal indices
//! - [`bayes`] - discrete Bayes posterior update
//! - [`simulation`] - reproducible coin/die experiments
//! - [`rounding`] - display rounding
//!
//! ## Design Philosophy
//!
//! - **Explicit domain errors**: invalid input yields `None` or a typed
//!   error instead of a silently wrong sentinel value
//! - **Numerical care**: compensated summation, log-space probability
//!   mass, symmetry-reduced binomial coefficients
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod bayes;
pub mod combinatorics;
pub mod distributions;
pub mod index_numbers;
pub mod regression;
pub mod rounding;
pub mod simulation;
pub mod special;
pub mod stats;
pub mod timeseries;
