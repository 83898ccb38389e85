use mockito::Matcher;
use plantai_client::{AssistantClient, Attachment};
use serde_json::json;

#[tokio::test]
async fn manual_mode_passes_raw_fields_through() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/calcular-materiais")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="area""#.to_string()),
            Matcher::Regex(r#"name="perimetro""#.to_string()),
            Matcher::Regex(r#"name="contexto""#.to_string()),
            Matcher::Regex("20".to_string()),
            Matcher::Regex("18".to_string()),
            Matcher::Regex("sala".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "materiais_estimados": {
                    "montantes": 42,
                    "guias": 12,
                    "um_material_inesperado": "3 caixas"
                },
                "resposta_ia": "Estimativa para 20 m²."
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = AssistantClient::new(server.url());
    let estimate = client
        .estimate_from_measures("20", "18", "sala")
        .await
        .unwrap();

    // One line per returned key; no fixed material list assumed.
    assert_eq!(
        estimate.materiais_estimados.display_lines(),
        vec![
            "guias: 12",
            "montantes: 42",
            "um material inesperado: 3 caixas",
        ]
    );
    assert_eq!(
        estimate.resposta_ia.as_deref(),
        Some("Estimativa para 20 m².")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn interpret_plan_parses_the_full_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/upload-planta")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"filename="planta.png""#.to_string()),
            Matcher::Regex(r#"name="contexto""#.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "materiais_estimados": {"placas_gesso": 14, "parafusos": 300},
                "resumo": "Sala retangular de 5 x 4 metros.",
                "medidas_detectadas": {"largura_metros": 5.0, "altura_metros": 4.0},
                "resposta_ia": "Planta interpretada."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let planta = Attachment::new("planta.png", b"png bytes".to_vec()).with_mime_type("image/png");
    let client = AssistantClient::new(server.url());
    let interpretation = client.interpret_plan(&planta, "forro").await.unwrap();

    assert_eq!(interpretation.resumo, "Sala retangular de 5 x 4 metros.");
    let measures = interpretation.medidas_detectadas.unwrap();
    assert_eq!(measures.largura_metros, 5.0);
    assert_eq!(measures.altura_metros, 4.0);
    assert_eq!(
        interpretation.materiais_estimados.display_lines(),
        vec!["parafusos: 300", "placas gesso: 14"]
    );
    assert_eq!(interpretation.resposta_ia.as_deref(), Some("Planta interpretada."));
}

#[tokio::test]
async fn interpret_plan_tolerates_a_minimal_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/upload-planta")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"materiais_estimados": {"fitas": 2}}).to_string())
        .create_async()
        .await;

    let planta = Attachment::new("planta.png", b"png bytes".to_vec());
    let client = AssistantClient::new(server.url());
    let interpretation = client.interpret_plan(&planta, "").await.unwrap();

    assert!(interpretation.medidas_detectadas.is_none());
    assert!(interpretation.resposta_ia.is_none());
    assert_eq!(interpretation.resumo, "");
    assert_eq!(
        interpretation.materiais_estimados.display_lines(),
        vec!["fitas: 2"]
    );
}
