//! 기능별 응답 스키마 선언
//!
//! 게이트웨이 요청마다 기대하는 JSON 결과의 정확한 형태를 함께
//! 선언한다. 필드 이름, 타입, 배열 항목 형태, 필드별 의도 설명을
//! 담는다.

use serde_json::{json, Value};

fn company_item() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "회사 이름" },
            "ticker": { "type": "STRING", "description": "회사의 티커 심볼" }
        }
    })
}

pub fn keyword_trends() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "keyword": { "type": "STRING", "description": "트래픽이 증가하는 키워드" },
                "reason": { "type": "STRING", "description": "트래픽 증가 이유에 대한 간략한 설명" },
                "trendData": {
                    "type": "ARRAY",
                    "items": { "type": "NUMBER" },
                    "description": "지난 한 달간의 트래픽 추이를 나타내는 3개의 숫자 배열 (예: [10, 45, 90])"
                },
                "companies": {
                    "type": "ARRAY",
                    "items": company_item(),
                    "description": "키워드와 관련된 추천 종목 목록"
                }
            }
        }
    })
}

pub fn market_trends() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "trendName": { "type": "STRING", "description": "트렌드의 이름" },
                "explanation": { "type": "STRING", "description": "트렌드에 대한 간략한 설명" },
                "companies": {
                    "type": "ARRAY",
                    "items": company_item()
                }
            }
        }
    })
}

pub fn sector_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sectorOverview": { "type": "STRING", "description": "섹터에 대한 전반적인 개요" },
            "growthDrivers": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "성장 동력 목록" },
            "risks": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "잠재적 위험 요소 목록" },
            "promisingCompanies": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "회사 이름" },
                        "ticker": { "type": "STRING", "description": "회사의 티커 심볼" },
                        "rationale": { "type": "STRING", "description": "회사가 유망한 이유" }
                    }
                }
            }
        }
    })
}

pub fn screened_companies() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "회사 이름" },
                "ticker": { "type": "STRING", "description": "회사의 티커 심볼" },
                "summary": { "type": "STRING", "description": "회사의 사업 개요" },
                "justification": { "type": "STRING", "description": "선정 기준에 부합하는 이유" }
            }
        }
    })
}

pub fn momentum_stocks() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "description": "회사 이름" },
                "ticker": { "type": "STRING", "description": "회사의 티커 심볼" },
                "signal": { "type": "STRING", "description": "포착된 구체적인 기술적 상승 모멘텀 신호" }
            }
        }
    })
}

pub fn technical_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "entryPrice": { "type": "STRING", "description": "기술적 분석에 기반한 진입 추천 가격 범위" },
            "targetPrice": { "type": "STRING", "description": "기술적 분석에 기반한 목표 가격" },
            "stopLossPrice": { "type": "STRING", "description": "리스크 관리를 위한 손절 추천 가격" },
            "analysisSummary": { "type": "STRING", "description": "제시된 가격들의 근거가 되는 기술적 분석 요약" },
            "previousClose": { "type": "STRING", "description": "가장 최근 거래일의 종가 (전일 종가). chartData의 마지막에서 두 번째 종가와 일치해야 함." },
            "previousAllTimeHigh": { "type": "STRING", "description": "분석 시점 이전의 사상 최고가(All-Time High)" },
            "currentPrice": { "type": "STRING", "description": "분석 시점의 현재가. chartData의 마지막 종가와 일치해야 함." },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "분석에 사용된 주요 기술적 지표나 패턴 키워드 목록 (예: '골든 크로스', 'RSI 과매수', '지지선')"
            },
            "chartData": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "date": { "type": "STRING", "description": "날짜 (YYYY-MM-DD 형식)" },
                        "open": { "type": "NUMBER" },
                        "high": { "type": "NUMBER" },
                        "low": { "type": "NUMBER" },
                        "close": { "type": "NUMBER" }
                    }
                },
                "description": "차트 생성을 위한 과거 12주간의 주간 캔들스틱 데이터"
            }
        }
    })
}

pub fn top_picks() -> Value {
    let pick_item = |description: &str| {
        json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "ticker": { "type": "STRING" },
                "rationale": { "type": "STRING", "description": description }
            }
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "highGrowth": {
                "type": "ARRAY",
                "items": pick_item("이 종목을 고수익 성장주로 추천하는 이유"),
                "description": "고수익 성장 투자 종목 2개"
            },
            "mediumRisk": {
                "type": "ARRAY",
                "items": pick_item("이 종목을 중위험 중수익 투자 종목으로 추천하는 이유"),
                "description": "중위험 중수익 투자 종목 1개"
            },
            "safe": {
                "type": "ARRAY",
                "items": pick_item("이 종목을 안전 투자 종목으로 추천하는 이유"),
                "description": "안전 투자 종목 1개"
            }
        }
    })
}

pub fn investment_projection() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "currentValue": { "type": "NUMBER", "description": "매입 수량에 따른 현재 추정 가치" },
            "projectedValue6M": { "type": "NUMBER", "description": "6개월 후의 예상 가치" },
            "targetPrice6M": { "type": "NUMBER", "description": "6개월 후의 예상 목표 주가" },
            "rationale": { "type": "STRING", "description": "예측의 근거가 되는 시장 동향 및 기업 분석 요약" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technical_analysis_schema_declares_chart_data() {
        let schema = technical_analysis();

        let chart_items = schema
            .pointer("/properties/chartData/items/properties")
            .unwrap();
        for field in ["date", "open", "high", "low", "close"] {
            assert!(chart_items.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_array_schemas_have_item_shapes() {
        for schema in [keyword_trends(), market_trends(), screened_companies(), momentum_stocks()] {
            assert_eq!(schema["type"], "ARRAY");
            assert!(schema["items"]["properties"].is_object());
        }
    }

    #[test]
    fn test_projection_schema_field_names() {
        let schema = investment_projection();

        for field in ["currentValue", "projectedValue6M", "targetPrice6M", "rationale"] {
            assert!(schema["properties"].get(field).is_some(), "missing field {}", field);
        }
    }
}
