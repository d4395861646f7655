//! Finite-difference derivatives of sampled data.
//!
//! Interior samples use the second-order centered formula (spacing-aware, so
//! it stays second order on ragged grids); the first and last samples use
//! first-order one-sided differences.

use crate::error::{GeometryError, Result};
use crate::quadrature::{validate_abscissas, validate_samples};
use nalgebra::DMatrix;

/// Derivative of `values` with respect to `abscissas`. Needs two samples.
pub fn gradient(values: &[f64], abscissas: &[f64]) -> Result<Vec<f64>> {
    validate_samples(values, abscissas)?;
    let mut out = vec![0.0; values.len()];
    gradient_into(values, abscissas, &mut out)?;
    Ok(out)
}

fn gradient_into(values: &[f64], x: &[f64], out: &mut [f64]) -> Result<()> {
    let n = values.len();
    if n < 2 {
        return Err(GeometryError::InsufficientSamples {
            operation: "gradient",
            samples: n,
            minimum: 2,
        });
    }

    out[0] = (values[1] - values[0]) / (x[1] - x[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (x[n - 1] - x[n - 2]);

    for i in 1..n - 1 {
        let h0 = x[i] - x[i - 1];
        let h1 = x[i + 1] - x[i];
        // Spacing ratios and value differences only: no h^2 or 1/h term,
        // which would leave the f64 range for tiny spacings.
        out[i] = ((h0 / h1) * (values[i + 1] - values[i])
            + (h1 / h0) * (values[i] - values[i - 1]))
            / (h0 + h1);
    }
    Ok(())
}

/// Derivative along the row index: column `j` is differentiated against
/// `abscissas`, which must have one entry per row.
pub fn partial_rows(field: &DMatrix<f64>, abscissas: &[f64]) -> Result<DMatrix<f64>> {
    let (rows, cols) = field.shape();
    validate_abscissas(rows, abscissas)?;

    let mut out = DMatrix::<f64>::zeros(rows, cols);
    let mut line = vec![0.0; rows];
    let mut deriv = vec![0.0; rows];
    for j in 0..cols {
        for i in 0..rows {
            line[i] = field[(i, j)];
        }
        gradient_into(&line, abscissas, &mut deriv)?;
        for i in 0..rows {
            out[(i, j)] = deriv[i];
        }
    }
    Ok(out)
}

/// Derivative along the column index: row `i` is differentiated against
/// `abscissas`, which must have one entry per column.
pub fn partial_cols(field: &DMatrix<f64>, abscissas: &[f64]) -> Result<DMatrix<f64>> {
    let (rows, cols) = field.shape();
    validate_abscissas(cols, abscissas)?;

    let mut out = DMatrix::<f64>::zeros(rows, cols);
    let mut line = vec![0.0; cols];
    let mut deriv = vec![0.0; cols];
    for i in 0..rows {
        for j in 0..cols {
            line[j] = field[(i, j)];
        }
        gradient_into(&line, abscissas, &mut deriv)?;
        for j in 0..cols {
            out[(i, j)] = deriv[j];
        }
    }
    Ok(out)
}
