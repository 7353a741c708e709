//! The [`Inspector`]: one frame in, one judged record out.
//!
//! Typical usage:
//! ```no_run
//! use part_inspector::catalog::product_spec;
//! use part_inspector::image::RgbImageU8;
//! use part_inspector::{Inspector, InspectorParams};
//!
//! # fn example(frame: RgbImageU8<'_>) -> part_inspector::Result<()> {
//! let inspector = Inspector::new(InspectorParams::default());
//! let spec = product_spec("FRC-180-STD")?;
//! let report = inspector.measure_dimensions(&frame, &spec)?;
//! println!("{:?} length={:.2}", report.status, report.measurements.length);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation validates its frame up front and reports failures as
//! typed [`InspectError`] values; a failed detection never degrades into a
//! passing record. Timings of the internal stages are captured into the
//! result so callers can watch latency without wrapping the calls.

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::aggregate;
use crate::calibration::{Calibration, CalibrationStore};
use crate::catalog::{self, ColorProduct, ColorStandard, GlossRange, ProductSpec, QualityTier};
use crate::color::{
    classify, color_difference, gloss_value, lab_from_rgb, mean_center_rgb, LabColor,
};
use crate::defects::{self, DefectCandidate};
use crate::dimensional;
use crate::error::{InspectError, Result};
use crate::geometry::detect_dominant_shape;
use crate::image::{GrayImageU8, RgbImageU8};
use crate::preprocess::rgb_to_gray;
use crate::report::{ColorAnalysisResult, MeasurementResult, TimingBreakdown};
use crate::synthetic::simulated_part_image;

use super::InspectorParams;

/// Inspection engine bundling the pipelines with the shared calibration.
///
/// The inspector itself is immutable; the only mutable state is the
/// calibration behind its store, so one instance can serve concurrent
/// callers.
pub struct Inspector {
    params: InspectorParams,
    calibration: CalibrationStore,
}

impl Inspector {
    /// Create an inspector, seeding the calibration store from `params`.
    pub fn new(params: InspectorParams) -> Self {
        let calibration = CalibrationStore::new(params.calibration);
        Self {
            params,
            calibration,
        }
    }

    pub fn params(&self) -> &InspectorParams {
        &self.params
    }

    /// Shared calibration state used by the measurement operations.
    pub fn calibration(&self) -> &CalibrationStore {
        &self.calibration
    }

    /// Measure the dominant part in `frame` against a product spec.
    ///
    /// Fails with [`InspectError::ObjectNotDetected`] when no boundary
    /// above the configured area floor is found.
    pub fn measure_dimensions(
        &self,
        frame: &RgbImageU8<'_>,
        spec: &ProductSpec,
    ) -> Result<MeasurementResult> {
        let total_start = Instant::now();
        frame.validate()?;
        let mut timing = TimingBreakdown::default();

        let stage = Instant::now();
        let gray = rgb_to_gray(frame);
        timing.push("grayscale", elapsed_ms(stage));

        let stage = Instant::now();
        let shape = detect_dominant_shape(gray.as_view(), &self.params.geometry)
            .ok_or(InspectError::ObjectNotDetected)?;
        timing.push("segmentation", elapsed_ms(stage));

        let stage = Instant::now();
        let calibration = self.calibration.snapshot();
        let eval = dimensional::evaluate(&shape, spec, &calibration);
        timing.push("evaluation", elapsed_ms(stage));

        let latency_ms = elapsed_ms(total_start);
        timing.total_ms = latency_ms;
        debug!(
            "measure: code={} status={:?} len={:.2} wid={:.2} latency_ms={:.2}",
            spec.code, eval.status, eval.measurements.length, eval.measurements.width, latency_ms
        );

        Ok(MeasurementResult {
            product_code: spec.code.clone(),
            product_name: spec.name.clone(),
            measurements: eval.measurements,
            nominal: spec.nominal,
            deviations: eval.deviations,
            tolerance: spec.tolerance,
            status: eval.status,
            issues: eval.issues,
            confidence: eval.confidence,
            contour_area: shape.area,
            bounding_box: shape.rect,
            latency_ms,
            timing,
        })
    }

    /// Calibrate from a reference object of known physical size.
    ///
    /// The reference dimensions are validated before any image work, so a
    /// bad reference reports [`InspectError::InvalidReference`] even on a
    /// frame with nothing in it.
    pub fn calibrate(
        &self,
        frame: &RgbImageU8<'_>,
        known_width: f64,
        known_height: f64,
    ) -> Result<Calibration> {
        if known_width <= 0.0 || known_height <= 0.0 {
            return Err(InspectError::InvalidReference {
                width: known_width,
                height: known_height,
            });
        }
        frame.validate()?;

        let gray = rgb_to_gray(frame);
        let shape = detect_dominant_shape(gray.as_view(), &self.params.geometry)
            .ok_or(InspectError::ObjectNotDetected)?;

        // Canonical rect: long side pairs with the reference width.
        let updated = self.calibration.update_from_reference(
            f64::from(shape.rect.width_px),
            f64::from(shape.rect.height_px),
            known_width,
            known_height,
        )?;
        debug!(
            "calibrate: measured={:.1}x{:.1}px known={:.2}x{:.2} ratio={:.4}",
            shape.rect.width_px, shape.rect.height_px, known_width, known_height,
            updated.pixels_per_unit
        );
        Ok(updated)
    }

    /// Color/surface analysis against an explicit standard, tier and gloss
    /// band, without catalog context.
    pub fn analyze_color(
        &self,
        frame: &RgbImageU8<'_>,
        standard: &ColorStandard,
        tier: QualityTier,
        gloss_range: GlossRange,
    ) -> Result<ColorAnalysisResult> {
        self.run_color_analysis(frame, standard, tier, gloss_range, None)
    }

    /// Color/surface analysis of a catalog product.
    ///
    /// Looks up the product's color standard; an unknown color code
    /// surfaces as [`InspectError::UnknownColorCode`].
    pub fn analyze_color_for_product(
        &self,
        frame: &RgbImageU8<'_>,
        product: &ColorProduct,
    ) -> Result<ColorAnalysisResult> {
        let standard = catalog::color_standard(&product.color_code)?;
        self.run_color_analysis(
            frame,
            &standard,
            product.tier,
            product.gloss_range,
            Some((&product.code, &product.name)),
        )
    }

    /// Like [`Inspector::analyze_color_for_product`], but on a simulated
    /// frame rendered for the product's color standard. `seed` fully
    /// determines the frame and therefore the result.
    pub fn analyze_color_simulated(
        &self,
        product: &ColorProduct,
        seed: u64,
    ) -> Result<ColorAnalysisResult> {
        let standard = catalog::color_standard(&product.color_code)?;
        let frame = simulated_part_image(&standard, seed);
        self.run_color_analysis(
            &frame.as_view(),
            &standard,
            product.tier,
            product.gloss_range,
            Some((&product.code, &product.name)),
        )
    }

    /// Standalone surface defect scan.
    pub fn detect_defects(&self, frame: &RgbImageU8<'_>) -> Result<Vec<DefectCandidate>> {
        frame.validate()?;
        let gray = rgb_to_gray(frame);
        let mut rng = StdRng::seed_from_u64(self.params.confidence_seed);
        Ok(defects::scan(gray.as_view(), &self.params.defects, &mut rng))
    }

    fn run_color_analysis(
        &self,
        frame: &RgbImageU8<'_>,
        standard: &ColorStandard,
        tier: QualityTier,
        gloss_range: GlossRange,
        product: Option<(&str, &str)>,
    ) -> Result<ColorAnalysisResult> {
        let total_start = Instant::now();
        frame.validate()?;
        let mut timing = TimingBreakdown::default();

        let stage = Instant::now();
        let gray = rgb_to_gray(frame);
        timing.push("grayscale", elapsed_ms(stage));

        // Color statistics and the defect scan are independent; with the
        // `parallel` feature they run on both halves of a rayon join. The
        // defect generator is seeded per call, so both builds produce the
        // same records.
        let stage = Instant::now();
        let seed = self.params.confidence_seed;

        #[cfg(feature = "parallel")]
        let ((measured_lab, gloss), found) = rayon::join(
            || color_stats(frame, &gray),
            || {
                let mut rng = StdRng::seed_from_u64(seed);
                defects::scan(gray.as_view(), &self.params.defects, &mut rng)
            },
        );

        #[cfg(not(feature = "parallel"))]
        let ((measured_lab, gloss), found) = (color_stats(frame, &gray), {
            let mut rng = StdRng::seed_from_u64(seed);
            defects::scan(gray.as_view(), &self.params.defects, &mut rng)
        });

        timing.push("analysis", elapsed_ms(stage));

        let stage = Instant::now();
        let delta_e = color_difference(&standard.lab_reference, &measured_lab);
        let tolerance = standard.tolerances.for_tier(tier);
        let color_verdict = classify(delta_e, tolerance);
        let gloss_in_range = gloss_range.contains(gloss);
        let disposition = aggregate::disposition(color_verdict, gloss_in_range, &found);
        let recommendation =
            aggregate::recommendation(delta_e, tolerance, gloss, gloss_in_range, found.len());
        // Separate generator for the analysis confidence, so the number of
        // defect draws cannot shift it.
        let mut conf_rng = StdRng::seed_from_u64(seed);
        let confidence = round1(conf_rng.gen_range(85.0..99.0));
        timing.push("verdict", elapsed_ms(stage));

        let latency_ms = elapsed_ms(total_start);
        timing.total_ms = latency_ms;
        debug!(
            "color analysis: code={} standard={} dE={:.2} verdict={:?} gloss={:.1} \
             defects={} disposition={:?} latency_ms={:.2}",
            product.map_or("-", |(code, _)| code),
            standard.code,
            delta_e,
            color_verdict,
            gloss,
            found.len(),
            disposition,
            latency_ms
        );

        Ok(ColorAnalysisResult {
            product_code: product.map(|(code, _)| code.to_string()),
            product_name: product.map(|(_, name)| name.to_string()),
            measured_lab,
            reference_lab: standard.lab_reference,
            delta_e,
            delta_e_tolerance: tolerance,
            color_verdict,
            gloss_value: gloss,
            gloss_range,
            gloss_in_range,
            defects: found,
            disposition,
            recommendation,
            confidence,
            latency_ms,
            timing,
        })
    }
}

/// Center-region Lab estimate plus whole-frame gloss.
fn color_stats(frame: &RgbImageU8<'_>, gray: &GrayImageU8) -> (LabColor, f64) {
    let rgb = mean_center_rgb(frame);
    (lab_from_rgb(rgb), gloss_value(gray.as_view()))
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
