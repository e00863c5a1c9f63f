//! Ordinary least squares of BBW/100 on VPIP, PFR and Agg.
//!
//! Solves the normal equations `(XᵀX) β = Xᵀy` by Gauss–Jordan elimination
//! with partial pivoting. The inverse of `XᵀX` is kept for the coefficient
//! standard errors.
use super::*;

/// Intercept plus one column per feature.
const P: usize = 4;
/// Pivots below this magnitude (relative to the largest diagonal) are singular.
const SINGULAR: f64 = 1e-12;

/// Fitted linear model `bbw100 = intercept + β·[vpip, pfr, agg]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Fit {
    /// Number of observations (players).
    pub n: usize,
    pub intercept: f64,
    /// Slopes for VPIP, PFR, Agg in that order.
    pub coefficients: [f64; 3],
    /// Standard errors for intercept, VPIP, PFR, Agg.
    pub errors: [f64; P],
    pub r_squared: f64,
    pub adj_r_squared: f64,
    /// Residual standard error on n - 4 degrees of freedom.
    pub rse: f64,
    /// Residual sum of squares.
    pub rss: f64,
}

impl Fit {
    pub fn ols(profiles: &[Profile]) -> anyhow::Result<Self> {
        let n = profiles.len();
        anyhow::ensure!(n > P, "need more than {} players to fit, found {}", P, n);
        let rows = profiles
            .iter()
            .map(|p| {
                let [vpip, pfr, agg] = p.features();
                ([1.0, vpip, pfr, agg], p.target())
            })
            .collect::<Vec<_>>();

        let mut xtx = [[0.0; P]; P];
        let mut xty = [0.0; P];
        for (x, y) in rows.iter() {
            for i in 0..P {
                xty[i] += x[i] * y;
                for j in 0..P {
                    xtx[i][j] += x[i] * x[j];
                }
            }
        }
        let inverse = invert(xtx)?;
        let beta = std::array::from_fn::<f64, P, _>(|i| (0..P).map(|j| inverse[i][j] * xty[j]).sum());

        let mean = rows.iter().map(|(_, y)| y).sum::<f64>() / n as f64;
        let (rss, tss) = rows.iter().fold((0.0, 0.0), |(rss, tss), (x, y)| {
            let fitted = (0..P).map(|i| beta[i] * x[i]).sum::<f64>();
            (rss + (y - fitted).powi(2), tss + (y - mean).powi(2))
        });
        let dof = (n - P) as f64;
        let r_squared = if tss > 0.0 { 1.0 - rss / tss } else { 1.0 };
        let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1) as f64 / dof;
        let sigma2 = rss / dof;
        let errors = std::array::from_fn(|i| (sigma2 * inverse[i][i]).max(0.0).sqrt());
        Ok(Self {
            n,
            intercept: beta[0],
            coefficients: [beta[1], beta[2], beta[3]],
            errors,
            r_squared,
            adj_r_squared,
            rse: sigma2.sqrt(),
            rss,
        })
    }

    pub fn predict(&self, profile: &Profile) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(profile.features())
                .map(|(b, x)| b * x)
                .sum::<f64>()
    }
}

/// Gauss–Jordan inverse with partial pivoting.
fn invert(mut a: [[f64; P]; P]) -> anyhow::Result<[[f64; P]; P]> {
    let scale = (0..P).map(|i| a[i][i].abs()).fold(0.0, f64::max).max(1.0);
    let mut inv = std::array::from_fn::<[f64; P], P, _>(|i| {
        std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 })
    });
    for col in 0..P {
        let pivot = (col..P)
            .max_by(|&r, &s| a[r][col].abs().total_cmp(&a[s][col].abs()))
            .unwrap_or(col);
        anyhow::ensure!(
            a[pivot][col].abs() > SINGULAR * scale,
            "design matrix is singular; features are collinear"
        );
        a.swap(col, pivot);
        inv.swap(col, pivot);
        let d = a[col][col];
        for j in 0..P {
            a[col][j] /= d;
            inv[col][j] /= d;
        }
        for row in (0..P).filter(|&r| r != col) {
            let factor = a[row][col];
            for j in 0..P {
                a[row][j] -= factor * a[col][j];
                inv[row][j] -= factor * inv[col][j];
            }
        }
    }
    Ok(inv)
}

impl std::fmt::Display for Fit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "BBW/100 ~ 1 + VPIP + PFR + AGG  (n = {})", self.n)?;
        let names = ["intercept", "vpip", "pfr", "agg"];
        let values = [
            self.intercept,
            self.coefficients[0],
            self.coefficients[1],
            self.coefficients[2],
        ];
        for ((name, value), error) in names.iter().zip(values).zip(self.errors) {
            writeln!(f, "  {:<10} {:>+12.6}  ({:.6})", name, value, error)?;
        }
        writeln!(f, "  R²         {:>12.6}", self.r_squared)?;
        writeln!(f, "  adj R²     {:>12.6}", self.adj_r_squared)?;
        write!(f, "  RSE        {:>12.6}  on {} dof", self.rse, self.n - P)
    }
}
