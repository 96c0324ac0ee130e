/// パラメータ分類
///
/// 呼び出しパラメータを記述子に照らしてパスパラメータとクエリパラメータに分け、
/// 必須パラメータの存在を検証します。副作用のない純粋関数です。
use crate::api::descriptor::MethodDescriptor;
use crate::api::error::ApiError;
use crate::api::params::{CallParameters, ParamValue};
use indexmap::IndexMap;

/// 分類結果
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedParams {
    /// URLテンプレートに埋め込む値（未エンコード）
    pub path_values: IndexMap<String, String>,
    /// クエリ文字列として送信する値（挿入順）
    pub query_values: Vec<(String, ParamValue)>,
}

/// パラメータを分類する
///
/// - 必須パラメータは宣言順にチェックし、最初に欠落しているものでエラーにする
/// - パスパラメータはクエリ側に残さない
/// - 宣言されていないパラメータはそのままクエリ側へ渡す
/// - `Null` の任意パラメータは送信しない
/// - 空のパスパラメータ（任意のもの）は `path_values` に含めない
///
/// # Errors
/// 必須パラメータが欠落または空の場合に `ApiError::MissingRequiredParameter`
pub fn classify(
    descriptor: &MethodDescriptor,
    params: &CallParameters,
) -> Result<ClassifiedParams, ApiError> {
    if let Some(missing) = descriptor.required_params.iter().find(|name| {
        params
            .get(name)
            .is_none_or(ParamValue::is_empty_equivalent)
    }) {
        return Err(ApiError::missing_required_parameter(descriptor.name, missing));
    }

    let mut path_values = IndexMap::new();
    let mut query_values = Vec::new();

    for (name, value) in &params.values {
        if descriptor.is_path_param(name) {
            // 空のパスパラメータは渡さず、テンプレート解決で検出させる
            if !value.is_empty_equivalent() {
                path_values.insert(name.clone(), value.to_path_value());
            }
        } else if !matches!(value, ParamValue::Null) {
            query_values.push((name.clone(), value.clone()));
        }
    }

    Ok(ClassifiedParams {
        path_values,
        query_values,
    })
}
