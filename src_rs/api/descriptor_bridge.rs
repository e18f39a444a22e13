// 목적:
// - Python에서 호출 가능한 디스크립터 어댑터 브릿지 클래스를 제공한다.
//
// 설명:
// - 설정 JSON으로 어댑터를 만들고 거리/중심/텍스트/행렬 연산을 노출한다.
// - 행렬은 numpy 2차원 배열(float32/uint8)로 주고받는다.
// - 디스크립터 인자는 float32/uint8 numpy 배열 또는 실수 리스트를 받는다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/adapter.rs

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing::debug;

use crate::core::adapter::{DescriptorAdapter, FloatDescriptorAdapter};
use crate::core::config::DescriptorConfig;
use crate::core::errors::DescriptorError;
use crate::core::telemetry::init_tracing;
use crate::descriptor::{Descriptor, DescriptorMatrix};

#[derive(FromPyObject)]
pub enum DescriptorArg<'py> {
    F32(PyReadonlyArray1<'py, f32>),
    U8(PyReadonlyArray1<'py, u8>),
    List(Vec<f32>),
}

impl DescriptorArg<'_> {
    fn into_descriptor(self) -> Descriptor {
        match self {
            DescriptorArg::F32(array) => Descriptor::F32(array.as_array().to_vec()),
            DescriptorArg::U8(array) => Descriptor::U8(array.as_array().to_vec()),
            DescriptorArg::List(values) => Descriptor::F32(values),
        }
    }
}

/// Python에 노출되는 디스크립터 브릿지 클래스다.
#[pyclass(name = "DescriptorBridge")]
pub struct PyDescriptorBridge {
    adapter: FloatDescriptorAdapter,
}

#[pymethods]
impl PyDescriptorBridge {
    /// 설정 JSON(선택)으로 브릿지 객체를 생성한다.
    #[new]
    #[pyo3(signature = (config_json=None))]
    pub fn new(config_json: Option<&str>) -> PyResult<Self> {
        if let Err(error) = init_tracing("warn") {
            debug!(%error, "tracing 구독자가 이미 설치되어 있습니다");
        }

        let config = match config_json {
            Some(payload) => DescriptorConfig::from_json(payload).map_err(to_py_error)?,
            None => DescriptorConfig::default(),
        };
        let adapter = FloatDescriptorAdapter::new(config).map_err(to_py_error)?;
        Ok(Self { adapter })
    }

    #[getter]
    pub fn descriptor_len(&self) -> usize {
        self.adapter.descriptor_len()
    }

    #[getter]
    pub fn packed_row_bytes(&self) -> usize {
        self.adapter.packed_row_bytes()
    }

    pub fn distance(&self, a: DescriptorArg<'_>, b: DescriptorArg<'_>) -> PyResult<u32> {
        self.adapter
            .distance(&a.into_descriptor(), &b.into_descriptor())
            .map_err(to_py_error)
    }

    /// (거리, degraded) 튜플을 반환한다.
    pub fn distance_lenient(
        &self,
        a: DescriptorArg<'_>,
        b: DescriptorArg<'_>,
    ) -> PyResult<(u32, bool)> {
        let measure = self
            .adapter
            .distance_lenient(&a.into_descriptor(), &b.into_descriptor())
            .map_err(to_py_error)?;
        Ok((measure.value, measure.degraded))
    }

    /// 중심 벡터를 반환한다. 빈 입력이면 빈 리스트다.
    pub fn mean_value(&self, descriptors: Vec<DescriptorArg<'_>>) -> Vec<f32> {
        let owned = collect_descriptors(descriptors);
        let borrowed = owned.iter().collect::<Vec<_>>();
        self.adapter.mean_value(&borrowed).to_f32_vec()
    }

    pub fn to_text(&self, descriptor: DescriptorArg<'_>) -> String {
        self.adapter.to_text(&descriptor.into_descriptor())
    }

    pub fn from_text(&self, text: &str) -> Vec<f32> {
        self.adapter.from_text(text).to_f32_vec()
    }

    pub fn from_text_strict(&self, text: &str) -> PyResult<Vec<f32>> {
        self.adapter
            .from_text_strict(text)
            .map(|descriptor| descriptor.to_f32_vec())
            .map_err(to_py_error)
    }

    pub fn to_matrix<'py>(
        &self,
        py: Python<'py>,
        descriptors: Vec<DescriptorArg<'py>>,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let owned = collect_descriptors(descriptors);
        let matrix = self.adapter.to_matrix(&owned).map_err(to_py_error)?;
        to_pyarray(py, matrix)
    }

    pub fn from_matrix(&self, matrix: PyReadonlyArray2<'_, f32>) -> PyResult<Vec<Vec<f32>>> {
        let view = matrix.as_array();
        let (rows, cols) = view.dim();
        let data = view.iter().copied().collect::<Vec<_>>();
        let matrix = DescriptorMatrix::from_vec(rows, cols, data).ok_or_else(|| {
            PyValueError::new_err(format!(
                "행렬 버퍼 크기가 형상과 맞지 않습니다: rows={}, cols={}",
                rows, cols
            ))
        })?;

        let descriptors = self.adapter.from_matrix(&matrix).map_err(to_py_error)?;
        Ok(descriptors
            .iter()
            .map(Descriptor::to_f32_vec)
            .collect())
    }

    pub fn to_packed_matrix<'py>(
        &self,
        py: Python<'py>,
        descriptors: Vec<DescriptorArg<'py>>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let owned = collect_descriptors(descriptors);
        let matrix = self.adapter.to_packed_matrix(&owned).map_err(to_py_error)?;
        to_pyarray(py, matrix)
    }
}

fn collect_descriptors(descriptors: Vec<DescriptorArg<'_>>) -> Vec<Descriptor> {
    descriptors
        .into_iter()
        .map(DescriptorArg::into_descriptor)
        .collect()
}

fn to_pyarray<'py, T: numpy::Element>(
    py: Python<'py>,
    matrix: DescriptorMatrix<T>,
) -> PyResult<Bound<'py, PyArray2<T>>> {
    let (rows, cols) = matrix.shape();
    let array = Array2::from_shape_vec((rows, cols), matrix.into_vec()).map_err(|error| {
        PyValueError::new_err(format!("numpy 행렬 생성 실패: {}", error))
    })?;
    Ok(array.into_pyarray(py))
}

fn to_py_error(error: DescriptorError) -> PyErr {
    PyValueError::new_err(error.to_string())
}
