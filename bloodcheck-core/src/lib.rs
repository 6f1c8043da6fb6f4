//! Kiểu dữ liệu lõi cho việc phân loại và tổng hợp chỉ số xét nghiệm máu.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Giới tính dùng để tra khoảng tham chiếu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SexCategory {
    Male,
    Female,
}

impl SexCategory {
    /// Phân giải key dạng chuỗi. Key không nhận dạng được rơi về `Male`
    /// (chính sách dự phòng có chủ đích, không phải lỗi).
    pub fn from_key(key: &str) -> Self {
        match key {
            "female" => SexCategory::Female,
            _ => SexCategory::Male,
        }
    }

    /// Key dạng chuỗi dùng trong giao diện và JSON.
    pub fn key(&self) -> &'static str {
        match self {
            SexCategory::Male => "male",
            SexCategory::Female => "female",
        }
    }

    /// Nhãn hiển thị trong báo cáo xuất.
    pub fn display_label(&self) -> &'static str {
        match self {
            SexCategory::Male => "Male",
            SexCategory::Female => "Female",
        }
    }
}

/// Định danh hồ sơ xét nghiệm, bộ cố định biết trước lúc khởi động.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileId {
    Basic,
    Extended,
    Hormone,
    Vital,
}

impl ProfileId {
    /// Toàn bộ hồ sơ theo thứ tự hiển thị.
    pub fn all() -> [ProfileId; 4] {
        [
            ProfileId::Basic,
            ProfileId::Extended,
            ProfileId::Hormone,
            ProfileId::Vital,
        ]
    }

    /// Phân giải key dạng chuỗi, trả `UnknownProfile` nếu nằm ngoài bộ cố định.
    pub fn from_key(key: &str) -> Result<Self, PanelError> {
        match key {
            "basic" => Ok(ProfileId::Basic),
            "extended" => Ok(ProfileId::Extended),
            "hormone" => Ok(ProfileId::Hormone),
            "vital" => Ok(ProfileId::Vital),
            other => Err(PanelError::UnknownProfile(other.to_string())),
        }
    }

    /// Key dạng chuỗi dùng trong giao diện và JSON.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileId::Basic => "basic",
            ProfileId::Extended => "extended",
            ProfileId::Hormone => "hormone",
            ProfileId::Vital => "vital",
        }
    }

    /// Vị trí ổn định trong catalog chuẩn.
    pub fn index(&self) -> usize {
        match self {
            ProfileId::Basic => 0,
            ProfileId::Extended => 1,
            ProfileId::Hormone => 2,
            ProfileId::Vital => 3,
        }
    }
}

/// Khoảng tham chiếu đóng cho một chỉ số. Bất biến: `min <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceInterval {
    pub min: f64,
    pub max: f64,
}

impl ReferenceInterval {
    /// Giá trị nằm trong khoảng, tính cả hai biên.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Khoảng tham chiếu tách theo giới tính.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceBySex {
    pub male: ReferenceInterval,
    pub female: ReferenceInterval,
}

impl ReferenceBySex {
    /// Tra khoảng tham chiếu cho giới tính đã phân giải.
    pub fn interval_for(&self, sex: SexCategory) -> ReferenceInterval {
        match sex {
            SexCategory::Male => self.male,
            SexCategory::Female => self.female,
        }
    }
}

/// Một chỉ số đo được trong hồ sơ: tên, đơn vị, mô tả và khoảng tham chiếu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyteDefinition {
    pub key: String,
    pub name: String,
    pub unit: String,
    pub description: String,
    pub reference: ReferenceBySex,
}

/// Hồ sơ xét nghiệm: dãy chỉ số theo thứ tự cố định, key duy nhất trong hồ sơ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub label: String,
    pub analytes: Vec<AnalyteDefinition>,
}

impl Profile {
    /// Tìm định nghĩa chỉ số theo key.
    pub fn analyte(&self, key: &str) -> Option<&AnalyteDefinition> {
        self.analytes.iter().find(|analyte| analyte.key == key)
    }
}

/// Trạng thái nhập liệu hiện tại: hồ sơ, giới tính và các giá trị thô đã nhập.
/// Mỗi lần đánh giá là một phép chiếu thuần tuý trên trạng thái này.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub profile: ProfileId,
    pub sex: SexCategory,
    pub values: HashMap<String, String>,
}

impl ViewState {
    /// Trạng thái mới, chưa nhập giá trị nào.
    pub fn new(profile: ProfileId, sex: SexCategory) -> Self {
        Self {
            profile,
            sex,
            values: HashMap::new(),
        }
    }

    /// Giá trị thô đã nhập cho một chỉ số; thiếu key coi như chuỗi rỗng.
    pub fn value_of(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Ghi lại giá trị thô người dùng nhập cho một chỉ số.
    pub fn set_value(&mut self, key: &str, raw: &str) {
        self.values.insert(key.to_string(), raw.to_string());
    }

    /// Đổi hồ sơ và xoá toàn bộ giá trị đã nhập: danh sách chỉ số thay đổi,
    /// giữ lại sẽ để sót các entry mồ côi không hiển thị được.
    pub fn switch_profile(&mut self, profile: ProfileId) {
        self.profile = profile;
        self.values.clear();
    }

    /// Đổi giới tính nhưng giữ nguyên giá trị đã nhập: cùng bộ chỉ số,
    /// chỉ khoảng tham chiếu thay đổi và lần đánh giá sau sẽ tự cập nhật.
    pub fn switch_sex(&mut self, sex: SexCategory) {
        self.sex = sex;
    }
}

/// Nhóm phân loại của một giá trị so với khoảng tham chiếu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Low,
    Normal,
    High,
}

/// Kết quả phân loại kèm nhãn hiển thị cho một giá trị nhập.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    pub category: StatusCategory,
    pub label: String,
}

/// Kết quả của một chỉ số, theo thứ tự hồ sơ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyteStatus {
    pub key: String,
    pub result: ClassificationResult,
}

/// Đếm số chỉ số theo từng nhóm phân loại, luôn tính lại từ đầu.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AggregateCounts {
    pub low: u32,
    pub normal: u32,
    pub high: u32,
}

impl AggregateCounts {
    /// Cộng dồn một kết quả phân loại.
    pub fn record(&mut self, category: StatusCategory) {
        match category {
            StatusCategory::Low => self.low += 1,
            StatusCategory::Normal => self.normal += 1,
            StatusCategory::High => self.high += 1,
        }
    }

    /// Tổng số chỉ số đã đếm.
    pub fn total(&self) -> u32 {
        self.low + self.normal + self.high
    }
}

/// Kết quả đánh giá đầy đủ của một hồ sơ: từng chỉ số và phần tổng hợp.
/// Không mang timestamp để hai lần gọi cùng đầu vào cho giá trị y hệt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    pub statuses: Vec<AnalyteStatus>,
    pub counts: AggregateCounts,
}

impl Evaluation {
    /// Danh sách kết quả theo đúng thứ tự chỉ số trong hồ sơ.
    pub fn rows(&self) -> &[AnalyteStatus] {
        &self.statuses
    }

    /// Tra kết quả phân loại theo key chỉ số.
    pub fn status(&self, key: &str) -> Option<&ClassificationResult> {
        self.statuses
            .iter()
            .find(|status| status.key == key)
            .map(|status| &status.result)
    }
}

/// Một dòng kết quả trong báo cáo xuất.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub unit: String,
    pub value: String,
    pub status_label: String,
    pub reference: ReferenceInterval,
}

/// Tài liệu báo cáo xuất: phần đầu, các dòng kết quả và phần tổng hợp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub profile_label: String,
    pub sex_label: String,
    pub rows: Vec<ReportRow>,
    pub summary: AggregateCounts,
}

/// Lỗi tra cứu cấu hình. Bộ hồ sơ và chỉ số cố định từ lúc khởi động nên
/// đây là lỗi phía caller, không phải trạng thái chạy cần phục hồi.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Không có hồ sơ xét nghiệm: {0}")]
    UnknownProfile(String),
    #[error("Hồ sơ không chứa chỉ số: {0}")]
    UnknownAnalyte(String),
}
