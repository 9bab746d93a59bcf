use sensor_filters::Filter;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub raw: f64,
    pub filtered: f64,
}

/// Pulls `samples` readings from `source` through `filter`, handing each pair to `sink`.
///
/// Returns the number of readings that produced a filtered value.
pub fn measure<F, S>(
    filter: &mut F,
    source: S,
    samples: usize,
    mut sink: impl FnMut(Measurement),
) -> usize
where
    F: Filter,
    S: IntoIterator<Item = f64>,
{
    let mut produced = 0;
    for raw in source.into_iter().take(samples) {
        if let Some(filtered) = filter.update(raw) {
            produced += 1;
            sink(Measurement { raw, filtered });
        }
    }

    log::debug!("Filtered {} of {} readings", produced, samples);
    produced
}

#[cfg(test)]
mod test {
    use super::*;
    use sensor_filters::RunningAverageFilter;

    #[test]
    fn every_reading_is_filtered() {
        let mut filter = RunningAverageFilter::new(3).unwrap();
        let mut output = vec![];

        let produced = measure(&mut filter, [1.0, 2.0, 3.0, 4.0], 10, |m| output.push(m));

        assert_eq!(produced, 4);
        assert_eq!(
            output,
            [
                Measurement { raw: 1.0, filtered: 1.0 },
                Measurement { raw: 2.0, filtered: 1.5 },
                Measurement { raw: 3.0, filtered: 2.0 },
                Measurement { raw: 4.0, filtered: 3.0 },
            ]
        );
    }

    #[test]
    fn stops_after_requested_samples() {
        let mut filter = RunningAverageFilter::new(2).unwrap();
        let produced = measure(&mut filter, core::iter::repeat(1.0), 5, |_| {});

        assert_eq!(produced, 5);
        assert_eq!(filter.current_average(), Some(1.0));
    }
}
