use crate::error::FourBodyError;
use crate::interaction_range::{
    classify_interaction_range, interaction_range_size_allocation, is_partly_short,
    InteractionCutoffDistances, InteractionRange,
};
use crate::long_range::LongRangeEnergyCorrector;
use crate::permutation::transform_sample;
use crate::rescaling::{RescalingEnergyModel, RescalingModel};
use crate::short_range::{
    ExtrapolationDistanceInfo, ExtrapolationEnergies, ShortRangeDataPreparer, ShortRangeEnergyCorrector,
};
use crate::smoothstep::smooth_01;

/// The batched four-body pipeline: classifies each six-side-length sample into an interaction
/// range, routes it through the trained rescaling model and/or the analytic short-/long-range
/// corrections, and returns one energy per input sample.
pub struct ExtrapolatedPotential<M> {
    rescaling_model: RescalingEnergyModel<M>,
    reciprocal_factor: f64,
    long_range_corrector: LongRangeEnergyCorrector,
    short_range_preparer: ShortRangeDataPreparer,
    short_range_corrector: ShortRangeEnergyCorrector,
    cutoffs: InteractionCutoffDistances,
}

impl<M: RescalingModel> ExtrapolatedPotential<M> {
    pub fn new(
        rescaling_model: RescalingEnergyModel<M>,
        reciprocal_factor: f64,
        long_range_corrector: LongRangeEnergyCorrector,
        short_range_preparer: ShortRangeDataPreparer,
        short_range_corrector: ShortRangeEnergyCorrector,
        cutoffs: InteractionCutoffDistances,
    ) -> Self {
        ExtrapolatedPotential {
            rescaling_model,
            reciprocal_factor,
            long_range_corrector,
            short_range_preparer,
            short_range_corrector,
            cutoffs,
        }
    }

    pub fn evaluate_batch(&self, samples: &[[f64; 6]]) -> Vec<f64> {
        let ranges: Vec<InteractionRange> =
            samples.iter().map(|s| classify_interaction_range(s, &self.cutoffs)).collect();

        let (batch_sidelengths, distance_infos) = self.fill_batch(&ranges, samples);

        let transformed: Vec<[f64; 6]> =
            batch_sidelengths.iter().map(|s| transform_sample(s, self.reciprocal_factor)).collect();

        let batch_energies = self.rescaling_model.evaluate_batch(&transformed, &batch_sidelengths);

        let mut i_batch = 0usize;
        let mut i_dist_info = 0usize;
        let mut output = Vec::with_capacity(samples.len());

        for (i_sample, &irange) in ranges.iter().enumerate() {
            let sample = &samples[i_sample];
            let energy = match irange {
                InteractionRange::AbinitioShort => {
                    self.take_short_range_energy(&batch_energies, &distance_infos, &mut i_batch, &mut i_dist_info)
                }
                InteractionRange::AbinitioShortmid => self.take_shortmid_range_energy(
                    &batch_energies,
                    &distance_infos,
                    &mut i_batch,
                    &mut i_dist_info,
                    sample,
                ),
                InteractionRange::AbinitioMid => self.take_mid_range_energy(&batch_energies, &mut i_batch),
                InteractionRange::MixedShort => {
                    let abinitio = self.take_short_range_energy(
                        &batch_energies,
                        &distance_infos,
                        &mut i_batch,
                        &mut i_dist_info,
                    );
                    self.long_range_corrector.mixed(abinitio, sample)
                }
                InteractionRange::MixedShortmid => {
                    let abinitio = self.take_shortmid_range_energy(
                        &batch_energies,
                        &distance_infos,
                        &mut i_batch,
                        &mut i_dist_info,
                        sample,
                    );
                    self.long_range_corrector.mixed(abinitio, sample)
                }
                InteractionRange::MixedMid => {
                    let abinitio = self.take_mid_range_energy(&batch_energies, &mut i_batch);
                    self.long_range_corrector.mixed(abinitio, sample)
                }
                InteractionRange::Long => self.long_range_corrector.dispersion(sample),
            };
            output.push(energy);
        }

        output
    }

    fn take_short_range_energy(
        &self,
        batch_energies: &[f64],
        distance_infos: &[ExtrapolationDistanceInfo],
        i_batch: &mut usize,
        i_dist_info: &mut usize,
    ) -> f64 {
        let dist_info = distance_infos[*i_dist_info];
        *i_dist_info += 1;
        let lower_energy = batch_energies[*i_batch];
        *i_batch += 1;
        let upper_energy = batch_energies[*i_batch];
        *i_batch += 1;
        let energies = ExtrapolationEnergies { lower: lower_energy, upper: upper_energy };
        self.short_range_corrector.correct(energies, dist_info)
    }

    fn take_mid_range_energy(&self, batch_energies: &[f64], i_batch: &mut usize) -> f64 {
        let energy = batch_energies[*i_batch];
        *i_batch += 1;
        energy
    }

    fn take_shortmid_range_energy(
        &self,
        batch_energies: &[f64],
        distance_infos: &[ExtrapolationDistanceInfo],
        i_batch: &mut usize,
        i_dist_info: &mut usize,
        sample: &[f64; 6],
    ) -> f64 {
        let short_range_energy =
            self.take_short_range_energy(batch_energies, distance_infos, i_batch, i_dist_info);
        let mid_range_energy = self.take_mid_range_energy(batch_energies, i_batch);

        let min_side_length = sample.iter().cloned().fold(f64::INFINITY, f64::min);
        let fraction_mid =
            smooth_01(min_side_length, self.cutoffs.lower_short_distance, self.cutoffs.upper_short_distance);
        let fraction_short = 1.0 - fraction_mid;

        fraction_short * short_range_energy + fraction_mid * mid_range_energy
    }

    fn fill_batch(
        &self,
        ranges: &[InteractionRange],
        samples: &[[f64; 6]],
    ) -> (Vec<[f64; 6]>, Vec<ExtrapolationDistanceInfo>) {
        let n_short = ranges.iter().filter(|&&ir| is_partly_short(ir)).count();
        let total: usize = ranges.iter().map(|&ir| interaction_range_size_allocation(ir)).sum();

        let mut batch_sidelengths = Vec::with_capacity(total);
        let mut distance_infos = Vec::with_capacity(n_short);

        for (i, &irange) in ranges.iter().enumerate() {
            let sample = &samples[i];
            match irange {
                InteractionRange::AbinitioShort | InteractionRange::MixedShort => {
                    let (lower, upper, dist_info) = self.short_range_preparer.prepare(sample);
                    batch_sidelengths.push(lower);
                    batch_sidelengths.push(upper);
                    distance_infos.push(dist_info);
                }
                InteractionRange::AbinitioShortmid | InteractionRange::MixedShortmid => {
                    let (lower, upper, dist_info) = self.short_range_preparer.prepare(sample);
                    batch_sidelengths.push(lower);
                    batch_sidelengths.push(upper);
                    distance_infos.push(dist_info);
                    batch_sidelengths.push(*sample);
                }
                InteractionRange::AbinitioMid | InteractionRange::MixedMid => {
                    batch_sidelengths.push(*sample);
                }
                InteractionRange::Long => {}
            }
        }

        (batch_sidelengths, distance_infos)
    }
}

/// Accumulates six-side-length samples into a fixed-capacity buffer, flushing them through
/// [`ExtrapolatedPotential::evaluate_batch`] whenever the buffer fills. `extract_energy` flushes
/// any remainder and resets the running total.
pub struct BufferedExtrapolatedPotential<M> {
    extrapolated_potential: ExtrapolatedPotential<M>,
    buffer: Vec<[f64; 6]>,
    buffer_size: usize,
    total_energy: f64,
}

impl<M: RescalingModel> BufferedExtrapolatedPotential<M> {
    pub fn new(extrapolated_potential: ExtrapolatedPotential<M>, buffer_size: usize) -> Result<Self, FourBodyError> {
        if buffer_size == 0 {
            return Err(FourBodyError::NonPositiveBufferSize(buffer_size));
        }
        Ok(BufferedExtrapolatedPotential {
            extrapolated_potential,
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
            total_energy: 0.0,
        })
    }

    pub fn add_sample(&mut self, side_lengths: [f64; 6]) {
        if self.buffer.len() == self.buffer_size {
            self.flush();
        }
        self.buffer.push(side_lengths);
    }

    pub fn extract_energy(&mut self) -> f64 {
        if !self.buffer.is_empty() {
            self.flush();
        }
        let energy = self.total_energy;
        self.total_energy = 0.0;
        energy
    }

    fn flush(&mut self) {
        let energies = self.extrapolated_potential.evaluate_batch(&self.buffer);
        self.total_energy += energies.iter().sum::<f64>();
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::long_range::LongRangeEnergyCorrector;
    use crate::rescaling::{IdentityRescalingModel, RescalingEnergyModel, ReverseEnergyRescaler, RescalingFunction, RescalingLimits};
    use pimc_potentials::FourBodyDispersionPotential;

    fn make_pipeline() -> ExtrapolatedPotential<IdentityRescalingModel> {
        let rescaling_function = RescalingFunction::new(1.0, 0.1, 1.0);
        let limits = RescalingLimits { from_left: -1.0, from_right: 1.0, to_left: 0.0, to_right: 1.0 };
        let reverse = ReverseEnergyRescaler::from_forward_limits(rescaling_function, limits);
        let model = RescalingEnergyModel::new(IdentityRescalingModel, reverse);

        let dispersion = FourBodyDispersionPotential::new(1.0).unwrap();
        let long_range = LongRangeEnergyCorrector::new(dispersion, 4.0, 4.5);
        let short_range_preparer = ShortRangeDataPreparer::new(0.05, 2.2).unwrap();
        let short_range_corrector = ShortRangeEnergyCorrector::new(6.0, 8.0).unwrap();
        let cutoffs = InteractionCutoffDistances::from_model_constants();

        ExtrapolatedPotential::new(model, 10.0, long_range, short_range_preparer, short_range_corrector, cutoffs)
    }

    #[test]
    fn long_range_sample_uses_only_dispersion() {
        let pipeline = make_pipeline();
        let samples = vec![[5.0, 5.0, 5.0, 5.0, 5.0, 5.0]];
        let energies = pipeline.evaluate_batch(&samples);
        assert_eq!(energies.len(), 1);
        assert!(energies[0].is_finite());
    }

    #[test]
    fn mid_range_sample_consumes_exactly_one_batch_row() {
        let pipeline = make_pipeline();
        let samples = vec![[3.0, 3.0, 3.0, 3.0, 3.0, 3.0]];
        let energies = pipeline.evaluate_batch(&samples);
        assert_eq!(energies.len(), 1);
        assert!(energies[0].is_finite());
    }

    #[test]
    fn buffered_potential_matches_single_batch_result() {
        let samples = vec![
            [5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
            [3.0, 3.1, 3.0, 3.2, 3.0, 3.1],
            [2.1, 3.0, 3.0, 3.0, 3.0, 3.0],
        ];

        let direct: f64 = make_pipeline().evaluate_batch(&samples).iter().sum();

        let mut buffered = BufferedExtrapolatedPotential::new(make_pipeline(), 2).unwrap();
        for s in &samples {
            buffered.add_sample(*s);
        }
        let via_buffer = buffered.extract_energy();

        assert!((direct - via_buffer).abs() < 1e-9);
    }
}
