/*
 * SGP4/SDP4 orbital models from Spacetrack Report #3.
 *
 * After the Pascal units by Dr TS Kelso and the C port by
 * Neoklis Kyriazis, with the reentrancy mods by Alexandru Csete OZ9AEC.
 */

pub(crate) mod math;
pub(crate) mod vals;

use math::{ac_tan, fmod2p, theta_g};
use vals::*;

use crate::coords::Vector;
use crate::tle::Tle;

/// Which orbital model fits an element set. Orbits with a period of 225
/// minutes or more need the deep-space corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ephemeris {
    NearEarth,
    DeepSpace,
}

impl Ephemeris {
    /// Selects the model for an element set by recovering the original
    /// mean motion and checking the orbital period.
    pub fn select(tle: &Tle) -> Ephemeris {
        let a1 = (XKE / tle.xno).powf(TOTHRD);
        let r1 = tle.xincl.cos();
        let dd1 = 1.0 - tle.eo * tle.eo;
        let temp = CK2 * 1.5 * (r1 * r1 * 3.0 - 1.0) / dd1.powf(1.5);
        let del1 = temp / (a1 * a1);
        let ao = a1 * (1.0 - del1 * (TOTHRD * 0.5 + del1 * (del1 * 1.654320987654321 + 1.0)));
        let delo = temp / (ao * ao);
        let xnodp = tle.xno / (delo + 1.0);

        /* Period > 225 minutes is deep space */
        if TWOPI / xnodp / XMNPDA >= 0.15625 {
            Ephemeris::DeepSpace
        } else {
            Ephemeris::NearEarth
        }
    }
}

/// Satellite state from one propagator run, in the model's native units:
/// position in Earth radii, velocity in Earth radii per minute.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prediction {
    pub pos: Vector,
    pub vel: Vector,
    /// Phase angle, rad.
    pub phase: f64,
}

impl Prediction {
    /// Position scaled to km.
    pub fn position_km(&self) -> Vector {
        self.pos.scale(XKMPER)
    }

    /// Velocity scaled to km/s.
    pub fn velocity_km_s(&self) -> Vector {
        self.vel.scale(XKMPER * XMNPDA / SECDAY)
    }
}

/// A propagator holding the model coefficients derived from one element
/// set. Rebuild it whenever the elements change.
#[derive(Debug, Clone)]
pub enum Propagator {
    NearEarth(Sgp4),
    DeepSpace(Sdp4),
}

impl Propagator {
    pub fn new(ephemeris: Ephemeris, tle: &Tle) -> Propagator {
        match ephemeris {
            Ephemeris::NearEarth => Propagator::NearEarth(Sgp4::new(tle)),
            Ephemeris::DeepSpace => Propagator::DeepSpace(Sdp4::new(tle)),
        }
    }

    /// Runs the model at `tsince` minutes after the element set epoch.
    pub fn run(&mut self, tle: &Tle, tsince: f64) -> Prediction {
        match self {
            Propagator::NearEarth(sgp) => sgp.run(tle, tsince),
            Propagator::DeepSpace(sdp) => sdp.run(tle, tsince),
        }
    }
}

/// SGP4 coefficients for near-earth (period < 225 minutes) elements.
#[derive(Debug, Clone, Default)]
pub struct Sgp4 {
    simple: bool,
    cosio: f64,
    x3thm1: f64,
    xnodp: f64,
    aodp: f64,
    eta: f64,
    c1: f64,
    c4: f64,
    c5: f64,
    sinio: f64,
    x1mth2: f64,
    xmdot: f64,
    omgdot: f64,
    xnodot: f64,
    omgcof: f64,
    xmcof: f64,
    xnodcf: f64,
    t2cof: f64,
    xlcof: f64,
    aycof: f64,
    delmo: f64,
    sinmo: f64,
    x7thm1: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
}

impl Sgp4 {
    fn new(tle: &Tle) -> Sgp4 {
        let mut sgp = Sgp4::default();

        /* Recover original mean motion (xnodp) and   */
        /* semimajor axis (aodp) from input elements. */
        let a1 = (XKE / tle.xno).powf(TOTHRD);
        sgp.cosio = tle.xincl.cos();
        let theta2 = sgp.cosio * sgp.cosio;
        sgp.x3thm1 = 3.0 * theta2 - 1.0;
        let eosq = tle.eo * tle.eo;
        let betao2 = 1.0 - eosq;
        let betao = betao2.sqrt();
        let del1 = 1.5 * CK2 * sgp.x3thm1 / (a1 * a1 * betao * betao2);
        let ao = a1 * (1.0 - del1 * (0.5 * TOTHRD + del1 * (1.0 + 134.0 / 81.0 * del1)));
        let delo = 1.5 * CK2 * sgp.x3thm1 / (ao * ao * betao * betao2);
        sgp.xnodp = tle.xno / (1.0 + delo);
        sgp.aodp = ao / (1.0 - delo);

        /* For perigee less than 220 kilometers, the "simple" flag is set */
        /* and the equations are truncated to linear variation in sqrt a  */
        /* and quadratic variation in mean anomaly.  Also, the c3 term,   */
        /* the delta omega term, and the delta m term are dropped.        */
        sgp.simple = (sgp.aodp * (1.0 - tle.eo) / AE) < (220.0 / XKMPER + AE);

        /* For perigee below 156 km, the       */
        /* values of s and qoms2t are altered. */
        let mut s4 = S;
        let mut qoms24 = QOMS2T;
        let perige = (sgp.aodp * (1.0 - tle.eo) - AE) * XKMPER;
        if perige < 156.0 {
            if perige <= 98.0 {
                s4 = 20.0;
            } else {
                s4 = perige - 78.0;
            }
            qoms24 = ((120.0 - s4) * AE / XKMPER).powi(4);
            s4 = s4 / XKMPER + AE;
        }

        let pinvsq = 1.0 / (sgp.aodp * sgp.aodp * betao2 * betao2);
        let tsi = 1.0 / (sgp.aodp - s4);
        sgp.eta = sgp.aodp * tle.eo * tsi;
        let etasq = sgp.eta * sgp.eta;
        let eeta = tle.eo * sgp.eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qoms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let c2 = coef1
            * sgp.xnodp
            * (sgp.aodp * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.75 * CK2 * tsi / psisq * sgp.x3thm1 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        sgp.c1 = c2 * tle.bstar;
        sgp.sinio = tle.xincl.sin();
        let a3ovk2 = -XJ3 / CK2 * AE.powi(3);
        sgp.x1mth2 = 1.0 - theta2;
        sgp.c4 = 2.0
            * sgp.xnodp
            * coef1
            * sgp.aodp
            * betao2
            * (sgp.eta * (2.0 + 0.5 * etasq) + tle.eo * (0.5 + 2.0 * etasq)
                - 2.0 * CK2 * tsi / (sgp.aodp * psisq)
                    * (-3.0 * sgp.x3thm1 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * sgp.x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * tle.omegao).cos()));
        sgp.c5 = 2.0 * coef1 * sgp.aodp * betao2 * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);
        let theta4 = theta2 * theta2;
        let temp1 = 3.0 * CK2 * pinvsq * sgp.xnodp;
        let temp2 = temp1 * CK2 * pinvsq;
        let temp3 = 1.25 * CK4 * pinvsq * pinvsq * sgp.xnodp;
        sgp.xmdot = sgp.xnodp
            + 0.5 * temp1 * betao * sgp.x3thm1
            + 0.0625 * temp2 * betao * (13.0 - 78.0 * theta2 + 137.0 * theta4);
        let x1m5th = 1.0 - 5.0 * theta2;
        sgp.omgdot = -0.5 * temp1 * x1m5th
            + 0.0625 * temp2 * (7.0 - 114.0 * theta2 + 395.0 * theta4)
            + temp3 * (3.0 - 36.0 * theta2 + 49.0 * theta4);
        let xhdot1 = -temp1 * sgp.cosio;
        sgp.xnodot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * theta2) + 2.0 * temp3 * (3.0 - 7.0 * theta2))
                * sgp.cosio;
        /* The c3 and delta-m terms divide by the eccentricity; both vanish
         * for near-circular sets and are dropped below e = 1.0e-4. */
        if tle.eo > 1.0e-4 {
            let c3 = coef * tsi * a3ovk2 * sgp.xnodp * AE * sgp.sinio / tle.eo;
            sgp.omgcof = tle.bstar * c3 * tle.omegao.cos();
            sgp.xmcof = -TOTHRD * coef * tle.bstar * AE / eeta;
        }
        sgp.xnodcf = 3.5 * betao2 * xhdot1 * sgp.c1;
        sgp.t2cof = 1.5 * sgp.c1;
        sgp.xlcof = 0.125 * a3ovk2 * sgp.sinio * (3.0 + 5.0 * sgp.cosio) / (1.0 + sgp.cosio);
        sgp.aycof = 0.25 * a3ovk2 * sgp.sinio;
        sgp.delmo = (1.0 + sgp.eta * tle.xmo.cos()).powi(3);
        sgp.sinmo = tle.xmo.sin();
        sgp.x7thm1 = 7.0 * theta2 - 1.0;
        if !sgp.simple {
            let c1sq = sgp.c1 * sgp.c1;
            sgp.d2 = 4.0 * sgp.aodp * tsi * c1sq;
            let temp = sgp.d2 * tsi * sgp.c1 / 3.0;
            sgp.d3 = (17.0 * sgp.aodp + s4) * temp;
            sgp.d4 = 0.5 * temp * sgp.aodp * tsi * (221.0 * sgp.aodp + 31.0 * s4) * sgp.c1;
            sgp.t3cof = sgp.d2 + 2.0 * c1sq;
            sgp.t4cof = 0.25 * (3.0 * sgp.d3 + sgp.c1 * (12.0 * sgp.d2 + 10.0 * c1sq));
            sgp.t5cof = 0.2
                * (3.0 * sgp.d4
                    + 12.0 * sgp.c1 * sgp.d3
                    + 6.0 * sgp.d2 * sgp.d2
                    + 15.0 * c1sq * (2.0 * sgp.d2 + c1sq));
        }

        sgp
    }

    fn run(&self, tle: &Tle, tsince: f64) -> Prediction {
        /* Update for secular gravity and atmospheric drag. */
        let xmdf = tle.xmo + self.xmdot * tsince;
        let omgadf = tle.omegao + self.omgdot * tsince;
        let xnoddf = tle.xnodeo + self.xnodot * tsince;
        let mut omega = omgadf;
        let mut xmp = xmdf;
        let tsq = tsince * tsince;
        let xnode = xnoddf + self.xnodcf * tsq;
        let mut tempa = 1.0 - self.c1 * tsince;
        let mut tempe = tle.bstar * self.c4 * tsince;
        let mut templ = self.t2cof * tsq;
        if !self.simple {
            let delomg = self.omgcof * tsince;
            let delm = self.xmcof * ((1.0 + self.eta * xmdf.cos()).powi(3) - self.delmo);
            let temp = delomg + delm;
            xmp = xmdf + temp;
            omega = omgadf - temp;
            let tcube = tsq * tsince;
            let tfour = tsince * tcube;
            tempa = tempa - self.d2 * tsq - self.d3 * tcube - self.d4 * tfour;
            tempe += tle.bstar * self.c5 * (xmp.sin() - self.sinmo);
            templ = templ + self.t3cof * tcube + tfour * (self.t4cof + tsince * self.t5cof);
        }

        let a = self.aodp * tempa.powi(2);
        let e = tle.eo - tempe;
        let xl = xmp + omega + xnode + self.xnodp * templ;
        let xn = XKE / a.powf(1.5);

        /* Long period periodics */
        let beta = (1.0 - e * e).sqrt();
        let axn = e * omega.cos();
        let temp = 1.0 / (a * beta * beta);
        let xll = temp * self.xlcof * axn;
        let aynl = temp * self.aycof;
        let xlt = xl + xll;
        let ayn = e * omega.sin() + aynl;

        let (pos, vel) = short_periodics(
            xlt, xnode, axn, ayn, a, xn, tle.xincl, self.cosio, self.sinio, self.x3thm1,
            self.x1mth2, self.x7thm1,
        );

        /* Phase in rads */
        let mut phase = xlt - xnode - omgadf + TWOPI;
        if phase < 0.0 {
            phase += TWOPI;
        }

        Prediction {
            pos,
            vel,
            phase: fmod2p(phase),
        }
    }
}

/// SDP4 coefficients shared between the driver and the deep-space
/// corrections.
#[derive(Debug, Clone, Default)]
struct SdpCoeffs {
    cosio: f64,
    theta2: f64,
    x3thm1: f64,
    eosq: f64,
    betao2: f64,
    betao: f64,
    xnodp: f64,
    aodp: f64,
    sing: f64,
    cosg: f64,
    c1: f64,
    c4: f64,
    sinio: f64,
    x1mth2: f64,
    xmdot: f64,
    omgdot: f64,
    xnodot: f64,
    xnodcf: f64,
    t2cof: f64,
    xlcof: f64,
    aycof: f64,
    x7thm1: f64,
}

/// Working state threaded through the deep-space entries during one run.
struct DeepArgs {
    xll: f64,
    omgadf: f64,
    xnode: f64,
    em: f64,
    xinc: f64,
    xn: f64,
    t: f64,
}

/// SDP4 model for deep-space (period >= 225 minutes) elements. Holds the
/// resonance integrator state, so runs mutate it.
#[derive(Debug, Clone)]
pub struct Sdp4 {
    k: SdpCoeffs,
    deep: Deep,
}

impl Sdp4 {
    fn new(tle: &Tle) -> Sdp4 {
        let mut k = SdpCoeffs::default();

        /* Recover original mean motion (xnodp) and   */
        /* semimajor axis (aodp) from input elements. */
        let a1 = (XKE / tle.xno).powf(TOTHRD);
        k.cosio = tle.xincl.cos();
        k.theta2 = k.cosio * k.cosio;
        k.x3thm1 = 3.0 * k.theta2 - 1.0;
        k.eosq = tle.eo * tle.eo;
        k.betao2 = 1.0 - k.eosq;
        k.betao = k.betao2.sqrt();
        let del1 = 1.5 * CK2 * k.x3thm1 / (a1 * a1 * k.betao * k.betao2);
        let ao = a1 * (1.0 - del1 * (0.5 * TOTHRD + del1 * (1.0 + 134.0 / 81.0 * del1)));
        let delo = 1.5 * CK2 * k.x3thm1 / (ao * ao * k.betao * k.betao2);
        k.xnodp = tle.xno / (1.0 + delo);
        k.aodp = ao / (1.0 - delo);

        /* For perigee below 156 km, the values */
        /* of s and qoms2t are altered.         */
        let mut s4 = S;
        let mut qoms24 = QOMS2T;
        let perige = (k.aodp * (1.0 - tle.eo) - AE) * XKMPER;
        if perige < 156.0 {
            if perige <= 98.0 {
                s4 = 20.0;
            } else {
                s4 = perige - 78.0;
            }
            qoms24 = ((120.0 - s4) * AE / XKMPER).powi(4);
            s4 = s4 / XKMPER + AE;
        }

        let pinvsq = 1.0 / (k.aodp * k.aodp * k.betao2 * k.betao2);
        let (sing, cosg) = tle.omegao.sin_cos();
        k.sing = sing;
        k.cosg = cosg;
        let tsi = 1.0 / (k.aodp - s4);
        let eta = k.aodp * tle.eo * tsi;
        let etasq = eta * eta;
        let eeta = tle.eo * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qoms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let c2 = coef1
            * k.xnodp
            * (k.aodp * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.75 * CK2 * tsi / psisq * k.x3thm1 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        k.c1 = tle.bstar * c2;
        k.sinio = tle.xincl.sin();
        let a3ovk2 = -XJ3 / CK2 * AE.powi(3);
        k.x1mth2 = 1.0 - k.theta2;
        k.c4 = 2.0
            * k.xnodp
            * coef1
            * k.aodp
            * k.betao2
            * (eta * (2.0 + 0.5 * etasq) + tle.eo * (0.5 + 2.0 * etasq)
                - 2.0 * CK2 * tsi / (k.aodp * psisq)
                    * (-3.0 * k.x3thm1 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * k.x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * tle.omegao).cos()));
        let theta4 = k.theta2 * k.theta2;
        let temp1 = 3.0 * CK2 * pinvsq * k.xnodp;
        let temp2 = temp1 * CK2 * pinvsq;
        let temp3 = 1.25 * CK4 * pinvsq * pinvsq * k.xnodp;
        k.xmdot = k.xnodp
            + 0.5 * temp1 * k.betao * k.x3thm1
            + 0.0625 * temp2 * k.betao * (13.0 - 78.0 * k.theta2 + 137.0 * theta4);
        let x1m5th = 1.0 - 5.0 * k.theta2;
        k.omgdot = -0.5 * temp1 * x1m5th
            + 0.0625 * temp2 * (7.0 - 114.0 * k.theta2 + 395.0 * theta4)
            + temp3 * (3.0 - 36.0 * k.theta2 + 49.0 * theta4);
        let xhdot1 = -temp1 * k.cosio;
        k.xnodot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * k.theta2) + 2.0 * temp3 * (3.0 - 7.0 * k.theta2))
                * k.cosio;
        k.xnodcf = 3.5 * k.betao2 * xhdot1 * k.c1;
        k.t2cof = 1.5 * k.c1;
        k.xlcof = 0.125 * a3ovk2 * k.sinio * (3.0 + 5.0 * k.cosio) / (1.0 + k.cosio);
        k.aycof = 0.25 * a3ovk2 * k.sinio;
        k.x7thm1 = 7.0 * k.theta2 - 1.0;

        let deep = Deep::new(tle, &k);
        Sdp4 { k, deep }
    }

    fn run(&mut self, tle: &Tle, tsince: f64) -> Prediction {
        /* Update for secular gravity and atmospheric drag */
        let xmdf = tle.xmo + self.k.xmdot * tsince;
        let omgadf = tle.omegao + self.k.omgdot * tsince;
        let xnoddf = tle.xnodeo + self.k.xnodot * tsince;
        let tsq = tsince * tsince;
        let xnode = xnoddf + self.k.xnodcf * tsq;
        let tempa = 1.0 - self.k.c1 * tsince;
        let tempe = tle.bstar * self.k.c4 * tsince;
        let templ = self.k.t2cof * tsq;

        let mut dp = DeepArgs {
            xll: xmdf,
            omgadf,
            xnode,
            em: 0.0,
            xinc: 0.0,
            xn: self.k.xnodp,
            t: tsince,
        };

        /* Update for deep-space secular effects */
        self.deep.secular(tle, &self.k, &mut dp);

        let a = (XKE / dp.xn).powf(TOTHRD) * tempa * tempa;
        dp.em -= tempe;
        dp.xll += self.k.xnodp * templ;

        /* Update for deep-space periodic effects */
        self.deep.periodic(&self.k, &mut dp);

        let xl = dp.xll + dp.omgadf + dp.xnode;
        let xn = XKE / a.powf(1.5);

        /* Long period periodics */
        let beta = (1.0 - dp.em * dp.em).sqrt();
        let axn = dp.em * dp.omgadf.cos();
        let temp = 1.0 / (a * beta * beta);
        let xll = temp * self.k.xlcof * axn;
        let aynl = temp * self.k.aycof;
        let xlt = xl + xll;
        let ayn = dp.em * dp.omgadf.sin() + aynl;

        let (pos, vel) = short_periodics(
            xlt,
            dp.xnode,
            axn,
            ayn,
            a,
            xn,
            dp.xinc,
            self.k.cosio,
            self.k.sinio,
            self.k.x3thm1,
            self.k.x1mth2,
            self.k.x7thm1,
        );

        /* Phase in rads */
        let mut phase = xlt - dp.xnode - dp.omgadf + TWOPI;
        if phase < 0.0 {
            phase += TWOPI;
        }

        Prediction {
            pos,
            vel,
            phase: fmod2p(phase),
        }
    }
}

/// Kepler solution and short-period corrections common to both models.
/// Returns position and velocity in model units.
#[allow(clippy::too_many_arguments)]
fn short_periodics(
    xlt: f64,
    xnode: f64,
    axn: f64,
    ayn: f64,
    a: f64,
    xn: f64,
    xincl: f64,
    cosio: f64,
    sinio: f64,
    x3thm1: f64,
    x1mth2: f64,
    x7thm1: f64,
) -> (Vector, Vector) {
    /* Solve Kepler's Equation */
    let capu = fmod2p(xlt - xnode);
    let mut temp2 = capu;
    let mut temp3 = 0.0;
    let mut temp4 = 0.0;
    let mut temp5 = 0.0;
    let mut temp6 = 0.0;
    let mut sinepw = 0.0;
    let mut cosepw = 0.0;

    for _ in 0..=10 {
        let (sinepw_t, cosepw_t) = temp2.sin_cos();
        sinepw = sinepw_t;
        cosepw = cosepw_t;
        temp3 = axn * sinepw;
        temp4 = ayn * cosepw;
        temp5 = axn * cosepw;
        temp6 = ayn * sinepw;
        let epw = (capu - temp4 + temp3 - temp2) / (1.0 - temp5 - temp6) + temp2;
        if (epw - temp2).abs() <= E6A {
            break;
        }
        temp2 = epw;
    }

    /* Short period preliminary quantities */
    let ecose = temp5 + temp6;
    let esine = temp3 - temp4;
    let elsq = axn * axn + ayn * ayn;
    let temp = 1.0 - elsq;
    let pl = a * temp;
    let r = a * (1.0 - ecose);
    let temp1 = 1.0 / r;
    let rdot = XKE * a.sqrt() * esine * temp1;
    let rfdot = XKE * pl.sqrt() * temp1;
    temp2 = a * temp1;
    let betal = temp.sqrt();
    temp3 = 1.0 / (1.0 + betal);
    let cosu = temp2 * (cosepw - axn + ayn * esine * temp3);
    let sinu = temp2 * (sinepw - ayn - axn * esine * temp3);
    let u = ac_tan(sinu, cosu);
    let sin2u = 2.0 * sinu * cosu;
    let cos2u = 2.0 * cosu * cosu - 1.0;
    let temp = 1.0 / pl;
    let temp1 = CK2 * temp;
    let temp2 = temp1 * temp;

    /* Update for short periodics */
    let rk = r * (1.0 - 1.5 * temp2 * betal * x3thm1) + 0.5 * temp1 * x1mth2 * cos2u;
    let uk = u - 0.25 * temp2 * x7thm1 * sin2u;
    let xnodek = xnode + 1.5 * temp2 * cosio * sin2u;
    let xinck = xincl + 1.5 * temp2 * cosio * sinio * cos2u;
    let rdotk = rdot - xn * temp1 * x1mth2 * sin2u;
    let rfdotk = rfdot + xn * temp1 * (x1mth2 * cos2u + 1.5 * x3thm1);

    /* Orientation vectors */
    let (sinuk, cosuk) = uk.sin_cos();
    let (sinik, cosik) = xinck.sin_cos();
    let (sinnok, cosnok) = xnodek.sin_cos();
    let xmx = -sinnok * cosik;
    let xmy = cosnok * cosik;
    let ux = xmx * sinuk + cosnok * cosuk;
    let uy = xmy * sinuk + sinnok * cosuk;
    let uz = sinik * sinuk;
    let vx = xmx * cosuk - cosnok * sinuk;
    let vy = xmy * cosuk - sinnok * sinuk;
    let vz = sinik * cosuk;

    /* Position and velocity */
    let pos = Vector::new(rk * ux, rk * uy, rk * uz);
    let vel = Vector::new(
        rdotk * ux + rfdotk * vx,
        rdotk * uy + rfdotk * vy,
        rdotk * uz + rfdotk * vz,
    );
    (pos, vel)
}

const STEPP: f64 = 720.0;
const STEPN: f64 = -720.0;
const STEP2: f64 = 259200.0;
const FASX2: f64 = 0.13130908;
const FASX4: f64 = 2.8843198;
const FASX6: f64 = 0.37448087;

/// Lunar and solar perturbation terms for deep-space orbits, plus the
/// resonance integrator state.
#[derive(Debug, Clone, Default)]
struct Deep {
    resonance: bool,
    synchronous: bool,
    thgr: f64,
    xnq: f64,
    xqncl: f64,
    omegaq: f64,
    zcosil: f64,
    zsinil: f64,
    zsinhl: f64,
    zcoshl: f64,
    zmol: f64,
    zcosgl: f64,
    zsingl: f64,
    zmos: f64,
    savtsn: f64,
    ee2: f64,
    e3: f64,
    xi2: f64,
    xi3: f64,
    xl2: f64,
    xl3: f64,
    xl4: f64,
    xgh2: f64,
    xgh3: f64,
    xgh4: f64,
    xh2: f64,
    xh3: f64,
    sse: f64,
    ssi: f64,
    ssl: f64,
    ssh: f64,
    ssg: f64,
    se2: f64,
    si2: f64,
    sl2: f64,
    sgh2: f64,
    sh2: f64,
    se3: f64,
    si3: f64,
    sl3: f64,
    sgh3: f64,
    sh3: f64,
    sl4: f64,
    sgh4: f64,
    d2201: f64,
    d2211: f64,
    d3210: f64,
    d3222: f64,
    d4410: f64,
    d4422: f64,
    d5220: f64,
    d5232: f64,
    d5421: f64,
    d5433: f64,
    xlamo: f64,
    del1: f64,
    del2: f64,
    del3: f64,
    xfact: f64,
    xli: f64,
    xni: f64,
    atime: f64,
    sghs: f64,
    shs: f64,
    sghl: f64,
    sh1: f64,
    pe: f64,
    pinc: f64,
    pl: f64,
}

impl Deep {
    /// Deep space initialization from the element set and the SDP4
    /// coefficient block.
    fn new(tle: &Tle, k: &SdpCoeffs) -> Deep {
        let mut d = Deep::default();

        let (thgr, ds50) = theta_g(tle.epoch);
        d.thgr = thgr;
        let eq = tle.eo;
        d.xnq = k.xnodp;
        let aqnv = 1.0 / k.aodp;
        d.xqncl = tle.xincl;
        let xmao = tle.xmo;
        let xpidot = k.omgdot + k.xnodot;
        let (sinq, cosq) = tle.xnodeo.sin_cos();
        d.omegaq = tle.omegao;

        /* Initialize lunar solar terms */
        let day = ds50 + 18261.5; /* Days since 1900 Jan 0.5 */
        let xnodce = 4.5236020 - 9.2422029E-4 * day;
        let (stem, ctem) = xnodce.sin_cos();
        d.zcosil = 0.91375164 - 0.03568096 * ctem;
        d.zsinil = (1.0 - d.zcosil * d.zcosil).sqrt();
        d.zsinhl = 0.089683511 * stem / d.zsinil;
        d.zcoshl = (1.0 - d.zsinhl * d.zsinhl).sqrt();
        let c = 4.7199672 + 0.22997150 * day;
        let gam = 5.8351514 + 0.0019443680 * day;
        d.zmol = fmod2p(c - gam);
        let mut zx = 0.39785416 * stem / d.zsinil;
        let zy = d.zcoshl * ctem + 0.91744867 * d.zsinhl * stem;
        zx = ac_tan(zx, zy);
        zx = gam + zx - xnodce;
        let (zsingl, zcosgl) = zx.sin_cos();
        d.zcosgl = zcosgl;
        d.zsingl = zsingl;
        d.zmos = fmod2p(6.2565837 + 0.017201977 * day);

        /* Do solar terms */
        d.savtsn = 1E20;
        let mut zcosg = ZCOSGS;
        let mut zsing = ZSINGS;
        let mut zcosi = ZCOSIS;
        let mut zsini = ZSINIS;
        let mut zcosh = cosq;
        let mut zsinh = sinq;
        let mut cc = C1SS;
        let mut zn = ZNS;
        let mut ze = ZES;
        let xnoi = 1.0 / d.xnq;

        let mut se = 0.0;
        let mut si = 0.0;
        let mut sl = 0.0;
        let mut sgh = 0.0;
        let mut sh = 0.0;
        let mut lunar_terms_done = false;

        /* Loop breaks when solar terms are done a second */
        /* time, after lunar terms are initialized        */
        loop {
            let a1 = zcosg * zcosh + zsing * zcosi * zsinh;
            let a3 = -zsing * zcosh + zcosg * zcosi * zsinh;
            let a7 = -zcosg * zsinh + zsing * zcosi * zcosh;
            let a8 = zsing * zsini;
            let a9 = zsing * zsinh + zcosg * zcosi * zcosh;
            let a10 = zcosg * zsini;
            let a2 = k.cosio * a7 + k.sinio * a8;
            let a4 = k.cosio * a9 + k.sinio * a10;
            let a5 = -k.sinio * a7 + k.cosio * a8;
            let a6 = -k.sinio * a9 + k.cosio * a10;
            let x1 = a1 * k.cosg + a2 * k.sing;
            let x2 = a3 * k.cosg + a4 * k.sing;
            let x3 = -a1 * k.sing + a2 * k.cosg;
            let x4 = -a3 * k.sing + a4 * k.cosg;
            let x5 = a5 * k.sing;
            let x6 = a6 * k.sing;
            let x7 = a5 * k.cosg;
            let x8 = a6 * k.cosg;
            let z31 = 12.0 * x1 * x1 - 3.0 * x3 * x3;
            let z32 = 24.0 * x1 * x2 - 6.0 * x3 * x4;
            let z33 = 12.0 * x2 * x2 - 3.0 * x4 * x4;
            let mut z1 = 3.0 * (a1 * a1 + a2 * a2) + z31 * k.eosq;
            let mut z2 = 6.0 * (a1 * a3 + a2 * a4) + z32 * k.eosq;
            let mut z3 = 3.0 * (a3 * a3 + a4 * a4) + z33 * k.eosq;
            let z11 = -6.0 * a1 * a5 + k.eosq * (-24.0 * x1 * x7 - 6.0 * x3 * x5);
            let z12 = -6.0 * (a1 * a6 + a3 * a5)
                + k.eosq * (-24.0 * (x2 * x7 + x1 * x8) - 6.0 * (x3 * x6 + x4 * x5));
            let z13 = -6.0 * a3 * a6 + k.eosq * (-24.0 * x2 * x8 - 6.0 * x4 * x6);
            let z21 = 6.0 * a2 * a5 + k.eosq * (24.0 * x1 * x5 - 6.0 * x3 * x7);
            let z22 = 6.0 * (a4 * a5 + a2 * a6)
                + k.eosq * (24.0 * (x2 * x5 + x1 * x6) - 6.0 * (x4 * x7 + x3 * x8));
            let z23 = 6.0 * a4 * a6 + k.eosq * (24.0 * x2 * x6 - 6.0 * x4 * x8);
            z1 = z1 + z1 + k.betao2 * z31;
            z2 = z2 + z2 + k.betao2 * z32;
            z3 = z3 + z3 + k.betao2 * z33;
            let s3 = cc * xnoi;
            let s2 = -0.5 * s3 / k.betao;
            let s4 = s3 * k.betao;
            let s1 = -15.0 * eq * s4;
            let s5 = x1 * x3 + x2 * x4;
            let s6 = x2 * x3 + x1 * x4;
            let s7 = x2 * x4 - x1 * x3;
            se = s1 * zn * s5;
            si = s2 * zn * (z11 + z13);
            sl = -zn * s3 * (z1 + z3 - 14.0 - 6.0 * k.eosq);
            sgh = s4 * zn * (z31 + z33 - 6.0);
            sh = -zn * s2 * (z21 + z23);
            if d.xqncl < 5.2359877E-2 {
                sh = 0.0;
            }
            d.ee2 = 2.0 * s1 * s6;
            d.e3 = 2.0 * s1 * s7;
            d.xi2 = 2.0 * s2 * z12;
            d.xi3 = 2.0 * s2 * (z13 - z11);
            d.xl2 = -2.0 * s3 * z2;
            d.xl3 = -2.0 * s3 * (z3 - z1);
            d.xl4 = -2.0 * s3 * (-21.0 - 9.0 * k.eosq) * ze;
            d.xgh2 = 2.0 * s4 * z32;
            d.xgh3 = 2.0 * s4 * (z33 - z31);
            d.xgh4 = -18.0 * s4 * ze;
            d.xh2 = -2.0 * s2 * z22;
            d.xh3 = -2.0 * s2 * (z23 - z21);

            if lunar_terms_done {
                break;
            }

            /* Do lunar terms */
            d.sse = se;
            d.ssi = si;
            d.ssl = sl;
            d.ssh = sh / k.sinio;
            d.ssg = sgh - k.cosio * d.ssh;
            d.se2 = d.ee2;
            d.si2 = d.xi2;
            d.sl2 = d.xl2;
            d.sgh2 = d.xgh2;
            d.sh2 = d.xh2;
            d.se3 = d.e3;
            d.si3 = d.xi3;
            d.sl3 = d.xl3;
            d.sgh3 = d.xgh3;
            d.sh3 = d.xh3;
            d.sl4 = d.xl4;
            d.sgh4 = d.xgh4;
            zcosg = d.zcosgl;
            zsing = d.zsingl;
            zcosi = d.zcosil;
            zsini = d.zsinil;
            zcosh = d.zcoshl * cosq + d.zsinhl * sinq;
            zsinh = sinq * d.zcoshl - cosq * d.zsinhl;
            zn = ZNL;
            cc = C1L;
            ze = ZEL;
            lunar_terms_done = true;
        }

        d.sse += se;
        d.ssi += si;
        d.ssl += sl;
        d.ssg += sgh - k.cosio / k.sinio * sh;
        d.ssh += sh / k.sinio;

        let bfact;
        if (d.xnq < 0.0052359877) && (d.xnq > 0.0034906585) {
            /* Synchronous resonance terms initialization */
            d.resonance = true;
            d.synchronous = true;
            let g200 = 1.0 + k.eosq * (-2.5 + 0.8125 * k.eosq);
            let g310 = 1.0 + 2.0 * k.eosq;
            let g300 = 1.0 + k.eosq * (-6.0 + 6.60937 * k.eosq);
            let f220 = 0.75 * (1.0 + k.cosio) * (1.0 + k.cosio);
            let f311 =
                0.9375 * k.sinio * k.sinio * (1.0 + 3.0 * k.cosio) - 0.75 * (1.0 + k.cosio);
            let mut f330 = 1.0 + k.cosio;
            f330 = 1.875 * f330 * f330 * f330;
            d.del1 = 3.0 * d.xnq * d.xnq * aqnv * aqnv;
            d.del2 = 2.0 * d.del1 * f220 * g200 * Q22;
            d.del3 = 3.0 * d.del1 * f330 * g300 * Q33 * aqnv;
            d.del1 = d.del1 * f311 * g310 * Q31 * aqnv;
            d.xlamo = xmao + tle.xnodeo + tle.omegao - d.thgr;
            bfact = k.xmdot + xpidot - THDT + d.ssl + d.ssg + d.ssh;
        } else {
            if (d.xnq < 0.00826) || (d.xnq > 0.00924) || (eq < 0.5) {
                /* Non-resonant orbit, integrator not needed */
                return d;
            }

            /* Geopotential resonance initialization for 12 hour orbits */
            d.resonance = true;
            let eoc = eq * k.eosq;
            let g201 = -0.306 - (eq - 0.64) * 0.440;
            let (g211, g310, g322, g410, g422, g520);
            if eq <= 0.65 {
                g211 = 3.616 - 13.247 * eq + 16.290 * k.eosq;
                g310 = -19.302 + 117.390 * eq - 228.419 * k.eosq + 156.591 * eoc;
                g322 = -18.9068 + 109.7927 * eq - 214.6334 * k.eosq + 146.5816 * eoc;
                g410 = -41.122 + 242.694 * eq - 471.094 * k.eosq + 313.953 * eoc;
                g422 = -146.407 + 841.880 * eq - 1629.014 * k.eosq + 1083.435 * eoc;
                g520 = -532.114 + 3017.977 * eq - 5740.0 * k.eosq + 3708.276 * eoc;
            } else {
                g211 = -72.099 + 331.819 * eq - 508.738 * k.eosq + 266.724 * eoc;
                g310 = -346.844 + 1582.851 * eq - 2415.925 * k.eosq + 1246.113 * eoc;
                g322 = -342.585 + 1554.908 * eq - 2366.899 * k.eosq + 1215.972 * eoc;
                g410 = -1052.797 + 4758.686 * eq - 7193.992 * k.eosq + 3651.957 * eoc;
                g422 = -3581.69 + 16178.11 * eq - 24462.77 * k.eosq + 12422.52 * eoc;
                if eq <= 0.715 {
                    g520 = 1464.74 - 4664.75 * eq + 3763.64 * k.eosq;
                } else {
                    g520 = -5149.66 + 29936.92 * eq - 54087.36 * k.eosq + 31324.56 * eoc;
                }
            }

            let (g533, g521, g532);
            if eq < 0.7 {
                g533 = -919.2277 + 4988.61 * eq - 9064.77 * k.eosq + 5542.21 * eoc;
                g521 = -822.71072 + 4568.6173 * eq - 8491.4146 * k.eosq + 5337.524 * eoc;
                g532 = -853.666 + 4690.25 * eq - 8624.77 * k.eosq + 5341.4 * eoc;
            } else {
                g533 = -37995.78 + 161616.52 * eq - 229838.2 * k.eosq + 109377.94 * eoc;
                g521 = -51752.104 + 218913.95 * eq - 309468.16 * k.eosq + 146349.42 * eoc;
                g532 = -40023.88 + 170470.89 * eq - 242699.48 * k.eosq + 115605.82 * eoc;
            }

            let sini2 = k.sinio * k.sinio;
            let f220 = 0.75 * (1.0 + 2.0 * k.cosio + k.theta2);
            let f221 = 1.5 * sini2;
            let f321 = 1.875 * k.sinio * (1.0 - 2.0 * k.cosio - 3.0 * k.theta2);
            let f322 = -1.875 * k.sinio * (1.0 + 2.0 * k.cosio - 3.0 * k.theta2);
            let f441 = 35.0 * sini2 * f220;
            let f442 = 39.3750 * sini2 * sini2;
            let f522 = 9.84375
                * k.sinio
                * (sini2 * (1.0 - 2.0 * k.cosio - 5.0 * k.theta2)
                    + 0.33333333 * (-2.0 + 4.0 * k.cosio + 6.0 * k.theta2));
            let f523 = k.sinio
                * (4.92187512 * sini2 * (-2.0 - 4.0 * k.cosio + 10.0 * k.theta2)
                    + 6.56250012 * (1.0 + 2.0 * k.cosio - 3.0 * k.theta2));
            let f542 = 29.53125
                * k.sinio
                * (2.0 - 8.0 * k.cosio + k.theta2 * (-12.0 + 8.0 * k.cosio + 10.0 * k.theta2));
            let f543 = 29.53125
                * k.sinio
                * (-2.0 - 8.0 * k.cosio + k.theta2 * (12.0 + 8.0 * k.cosio - 10.0 * k.theta2));
            let xno2 = d.xnq * d.xnq;
            let ainv2 = aqnv * aqnv;
            let mut temp1 = 3.0 * xno2 * ainv2;
            let mut temp = temp1 * ROOT22;
            d.d2201 = temp * f220 * g201;
            d.d2211 = temp * f221 * g211;
            temp1 *= aqnv;
            temp = temp1 * ROOT32;
            d.d3210 = temp * f321 * g310;
            d.d3222 = temp * f322 * g322;
            temp1 *= aqnv;
            temp = 2.0 * temp1 * ROOT44;
            d.d4410 = temp * f441 * g410;
            d.d4422 = temp * f442 * g422;
            temp1 *= aqnv;
            temp = temp1 * ROOT52;
            d.d5220 = temp * f522 * g520;
            d.d5232 = temp * f523 * g532;
            temp = 2.0 * temp1 * ROOT54;
            d.d5421 = temp * f542 * g521;
            d.d5433 = temp * f543 * g533;
            d.xlamo = xmao + tle.xnodeo + tle.xnodeo - d.thgr - d.thgr;
            bfact = k.xmdot + k.xnodot + k.xnodot - THDT - THDT + d.ssl + d.ssh + d.ssh;
        }

        d.xfact = bfact - d.xnq;

        /* Initialize integrator */
        d.xli = d.xlamo;
        d.xni = d.xnq;
        d.atime = 0.0;

        d
    }

    /// Deep space secular effects.
    fn secular(&mut self, tle: &Tle, k: &SdpCoeffs, dp: &mut DeepArgs) {
        dp.xll += self.ssl * dp.t;
        dp.omgadf += self.ssg * dp.t;
        dp.xnode += self.ssh * dp.t;
        dp.em = tle.eo + self.sse * dp.t;
        dp.xinc = tle.xincl + self.ssi * dp.t;
        if dp.xinc < 0.0 {
            dp.xinc = -dp.xinc;
            dp.xnode += PI;
            dp.omgadf -= PI;
        }

        if !self.resonance {
            return;
        }

        let mut delt = 0.0;
        let mut ft = 0.0;
        let mut xndot = 0.0;
        let mut xnddt = 0.0;
        let mut xldot = 0.0;
        let mut do_loop = false;
        let mut epoch_restart = false;

        loop {
            if (self.atime == 0.0)
                || ((dp.t >= 0.0) && (self.atime < 0.0))
                || ((dp.t < 0.0) && (self.atime >= 0.0))
            {
                /* Epoch restart */
                delt = if dp.t >= 0.0 { STEPP } else { STEPN };
                self.atime = 0.0;
                self.xni = self.xnq;
                self.xli = self.xlamo;
            } else if dp.t.abs() >= self.atime.abs() {
                delt = if dp.t > 0.0 { STEPP } else { STEPN };
            }

            loop {
                if (dp.t - self.atime).abs() >= STEPP {
                    do_loop = true;
                    epoch_restart = false;
                } else {
                    ft = dp.t - self.atime;
                    do_loop = false;
                }

                if dp.t.abs() < self.atime.abs() {
                    delt = if dp.t >= 0.0 { STEPN } else { STEPP };
                    do_loop = true;
                    epoch_restart = true;
                }

                /* Dot terms calculated */
                if self.synchronous {
                    xndot = self.del1 * (self.xli - FASX2).sin()
                        + self.del2 * (2.0 * (self.xli - FASX4)).sin()
                        + self.del3 * (3.0 * (self.xli - FASX6)).sin();
                    xnddt = self.del1 * (self.xli - FASX2).cos()
                        + 2.0 * self.del2 * (2.0 * (self.xli - FASX4)).cos()
                        + 3.0 * self.del3 * (3.0 * (self.xli - FASX6)).cos();
                } else {
                    let xomi = self.omegaq + k.omgdot * self.atime;
                    let x2omi = xomi + xomi;
                    let x2li = self.xli + self.xli;
                    xndot = self.d2201 * (x2omi + self.xli - G22).sin()
                        + self.d2211 * (self.xli - G22).sin()
                        + self.d3210 * (xomi + self.xli - G32).sin()
                        + self.d3222 * (-xomi + self.xli - G32).sin()
                        + self.d4410 * (x2omi + x2li - G44).sin()
                        + self.d4422 * (x2li - G44).sin()
                        + self.d5220 * (xomi + self.xli - G52).sin()
                        + self.d5232 * (-xomi + self.xli - G52).sin()
                        + self.d5421 * (xomi + x2li - G54).sin()
                        + self.d5433 * (-xomi + x2li - G54).sin();
                    xnddt = self.d2201 * (x2omi + self.xli - G22).cos()
                        + self.d2211 * (self.xli - G22).cos()
                        + self.d3210 * (xomi + self.xli - G32).cos()
                        + self.d3222 * (-xomi + self.xli - G32).cos()
                        + self.d5220 * (xomi + self.xli - G52).cos()
                        + self.d5232 * (-xomi + self.xli - G52).cos()
                        + 2.0
                            * (self.d4410 * (x2omi + x2li - G44).cos()
                                + self.d4422 * (x2li - G44).cos()
                                + self.d5421 * (xomi + x2li - G54).cos()
                                + self.d5433 * (-xomi + x2li - G54).cos());
                }

                xldot = self.xni + self.xfact;
                xnddt *= xldot;

                if do_loop {
                    self.xli += xldot * delt + xndot * STEP2;
                    self.xni += xndot * delt + xnddt * STEP2;
                    self.atime += delt;
                }

                if !(do_loop && !epoch_restart) {
                    break;
                }
            }

            if !(do_loop && epoch_restart) {
                break;
            }
        }

        dp.xn = self.xni + xndot * ft + xnddt * ft * ft * 0.5;
        let xl = self.xli + xldot * ft + xndot * ft * ft * 0.5;
        let temp = -dp.xnode + self.thgr + dp.t * THDT;

        /* Recover the mean anomaly from the resonance variable: the
         * synchronous integrator advances M + omega + Omega - theta,
         * the 12-hour one M + 2(Omega - theta). */
        dp.xll = if self.synchronous {
            xl - dp.omgadf + temp
        } else {
            xl + temp + temp
        };
    }

    /// Lunar-solar periodics.
    fn periodic(&mut self, k: &SdpCoeffs, dp: &mut DeepArgs) {
        let (sinis, cosis) = dp.xinc.sin_cos();

        if (self.savtsn - dp.t).abs() >= 30.0 {
            self.savtsn = dp.t;
            let mut zm = self.zmos + ZNS * dp.t;
            let mut zf = zm + 2.0 * ZES * zm.sin();
            let mut sinzf = zf.sin();
            let mut f2 = 0.5 * sinzf * sinzf - 0.25;
            let mut f3 = -0.5 * sinzf * zf.cos();
            let ses = self.se2 * f2 + self.se3 * f3;
            let sis = self.si2 * f2 + self.si3 * f3;
            let sls = self.sl2 * f2 + self.sl3 * f3 + self.sl4 * sinzf;
            self.sghs = self.sgh2 * f2 + self.sgh3 * f3 + self.sgh4 * sinzf;
            self.shs = self.sh2 * f2 + self.sh3 * f3;
            zm = self.zmol + ZNL * dp.t;
            zf = zm + 2.0 * ZEL * zm.sin();
            sinzf = zf.sin();
            f2 = 0.5 * sinzf * sinzf - 0.25;
            f3 = -0.5 * sinzf * zf.cos();
            let sel = self.ee2 * f2 + self.e3 * f3;
            let sil = self.xi2 * f2 + self.xi3 * f3;
            let sll = self.xl2 * f2 + self.xl3 * f3 + self.xl4 * sinzf;
            self.sghl = self.xgh2 * f2 + self.xgh3 * f3 + self.xgh4 * sinzf;
            self.sh1 = self.xh2 * f2 + self.xh3 * f3;
            self.pe = ses + sel;
            self.pinc = sis + sil;
            self.pl = sls + sll;
        }

        let mut pgh = self.sghs + self.sghl;
        let mut ph = self.shs + self.sh1;
        dp.xinc += self.pinc;
        dp.em += self.pe;

        if self.xqncl >= 0.2 {
            /* Apply periodics directly */
            ph /= k.sinio;
            pgh -= k.cosio * ph;
            dp.omgadf += pgh;
            dp.xnode += ph;
            dp.xll += self.pl;
        } else {
            /* Apply periodics with Lyddane modification */
            let (sinok, cosok) = dp.xnode.sin_cos();
            let mut alfdp = sinis * sinok;
            let mut betdp = sinis * cosok;
            let dalf = ph * cosok + self.pinc * cosis * sinok;
            let dbet = -ph * sinok + self.pinc * cosis * cosok;
            alfdp += dalf;
            betdp += dbet;
            dp.xnode = fmod2p(dp.xnode);
            let mut xls = dp.xll + dp.omgadf + cosis * dp.xnode;
            let dls = self.pl + pgh - self.pinc * dp.xnode * sinis;
            xls += dls;
            let xnoh = dp.xnode;
            dp.xnode = ac_tan(alfdp, betdp);

            /* This is a patch to Lyddane modification */
            /* suggested by Rob Matson. */
            if (xnoh - dp.xnode).abs() > PI {
                if dp.xnode < xnoh {
                    dp.xnode += TWOPI;
                } else {
                    dp.xnode -= TWOPI;
                }
            }

            dp.xll += self.pl;
            dp.omgadf = xls - dp.xll - dp.xinc.cos() * dp.xnode;
        }
    }
}
