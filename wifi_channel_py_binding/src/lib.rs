use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;
use wifi_channel_lib::{classify_all, BandFilter, Classification, Frequency};

fn value_error<E: std::fmt::Display>(error: E) -> PyErr {
    PyValueError::new_err(error.to_string())
}

#[pymodule]
fn wifi_channel<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    /**
     * Classify a frequency
     *
     * \param mhz: Frequency in MHz
     *
     * \returns A tuple of (band name, channel, WiFi band or None)
     */
    #[pyfn(m)]
    fn find(mhz: i32) -> (String, i32, Option<String>) {
        let Classification {
            frequency,
            channel,
            wifi_band,
            ..
        } = Classification::of(mhz);

        (
            frequency.as_ref().to_string(),
            channel,
            wifi_band.map(|band| band.to_string()),
        )
    }

    #[pyfn(m)]
    fn find_channel(mhz: i32) -> i32 {
        Frequency::find_channel(mhz)
    }

    /**
     * Check whether a frequency lies in a named band, e.g. "two_point_four"
     */
    #[pyfn(m)]
    fn in_range(name: &str, mhz: i32) -> PyResult<bool> {
        let frequency = name.parse::<Frequency>().map_err(value_error)?;
        Ok(frequency.in_range(mhz))
    }

    /**
     * Sorted channel numbers of a band ("all", "2.4" or "5")
     */
    #[pyfn(m)]
    #[pyo3(signature = (band = "all"))]
    fn find_channels<'py>(py: Python<'py>, band: &str) -> PyResult<Bound<'py, PyArray1<i32>>> {
        let filter = band.parse::<BandFilter>().map_err(value_error)?;
        let channels: Vec<i32> = Frequency::find_channels(filter).into_iter().collect();

        Ok(PyArray1::from_vec_bound(py, channels))
    }

    #[pyfn(m)]
    fn find_frequency(channel: i32) -> PyResult<i32> {
        Frequency::find_frequency(channel).map_err(value_error)
    }

    /**
     * Classify a list of frequencies
     *
     * \returns A tuple of (channels as numpy array, list of WiFi bands),
     *          both with length equal to the number of frequencies.
     */
    #[pyfn(m)]
    fn classify<'py>(
        py: Python<'py>,
        frequencies: Vec<i32>,
    ) -> (Bound<'py, PyArray1<i32>>, Bound<'py, PyList>) {
        let classifications = classify_all(&frequencies);

        let channels: Vec<i32> = classifications.iter().map(|c| c.channel).collect();
        let bands: Vec<Option<String>> = classifications
            .iter()
            .map(|c| c.wifi_band.map(|band| band.to_string()))
            .collect();

        (
            PyArray1::from_vec_bound(py, channels),
            PyList::new_bound(py, bands),
        )
    }

    Ok(())
}
