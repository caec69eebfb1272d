use super::*;
use crate::{Compra, EstadoCompra, EstadoConsulta};
use serde_json::json;

// =========================================================
// List-shape normalization
// =========================================================

#[test]
fn test_lista_plana_y_envuelta_dan_lo_mismo() {
    let plana = json!([
        {"id": 1, "asunto": "A", "estado": "abierta"},
        {"id": 2, "asunto": "B", "estado": "cerrada"}
    ]);
    let envuelta = json!({"consultas": plana.clone()});

    let a: Vec<Consulta> = extraer_lista(plana, "consultas").unwrap();
    let b: Vec<Consulta> = extraer_lista(envuelta, "consultas").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
    assert_eq!(a[1].estado, EstadoConsulta::Cerrada);
}

#[test]
fn test_objeto_sin_clave_es_lista_vacia() {
    let valor = json!({"mensaje": "sin resultados"});
    let lista: Vec<Consulta> = extraer_lista(valor, "consultas").unwrap();
    assert!(lista.is_empty());
}

#[test]
fn test_forma_invalida_es_error() {
    assert!(extraer_lista::<Consulta>(json!("texto"), "consultas").is_err());
    assert!(extraer_lista::<Consulta>(json!({"consultas": 42}), "consultas").is_err());
}

#[test]
fn test_compras_envueltas() {
    let valor = json!({"compras": [{"id": 5, "estado": "pagada"}]});
    let compras: Vec<Compra> = extraer_lista(valor, "compras").unwrap();
    assert_eq!(compras[0].estado, EstadoCompra::Pagada);
}

// =========================================================
// Response envelopes
// =========================================================

#[test]
fn test_sesion_response() {
    let valor = json!({
        "user": {"id": 1, "nombre": "Ana", "email": "ana@x.com", "rol": "cliente"},
        "token": "abc.def.ghi"
    });
    let sesion: SesionResponse = serde_json::from_value(valor).unwrap();
    assert_eq!(sesion.user.rol, crate::Rol::Cliente);
    assert_eq!(sesion.token, "abc.def.ghi");
}

#[test]
fn test_consultas_disponibles_con_defaults() {
    let completo: ConsultasDisponibles = serde_json::from_value(json!({
        "consultas_disponibles": 3,
        "consultas": [{"id": 1, "asunto": "A", "estado": "abierta"}]
    }))
    .unwrap();
    assert_eq!(completo.consultas_disponibles, 3);
    assert_eq!(completo.consultas.len(), 1);

    // The server may omit both fields when the client never bought anything.
    let vacio: ConsultasDisponibles = serde_json::from_value(json!({})).unwrap();
    assert_eq!(vacio.consultas_disponibles, 0);
    assert!(vacio.consultas.is_empty());
}

#[test]
fn test_consultas_disponibles_lista_plana() {
    // Same inconsistency as the list endpoints: sometimes the wrapping
    // object is skipped and a bare array arrives. It must still populate
    // the list, with the quota reading 0.
    let valor = json!([
        {"id": 1, "asunto": "Despido", "estado": "abierta"},
        {"id": 2, "asunto": "Arriendo", "estado": "respondida"}
    ]);
    let datos: ConsultasDisponibles = serde_json::from_value(valor).unwrap();
    assert_eq!(datos.consultas_disponibles, 0);
    assert_eq!(datos.consultas.len(), 2);
    assert_eq!(datos.consultas[1].estado, EstadoConsulta::Respondida);
}

#[test]
fn test_estadisticas_conteo_numero_o_total() {
    let como_numeros: Estadisticas = serde_json::from_value(json!({
        "usuarios": 12,
        "planes_activos": 4,
        "compras": 30,
        "ingresos_totales": 150000.5
    }))
    .unwrap();
    assert_eq!(como_numeros.usuarios.valor(), 12);
    assert_eq!(como_numeros.compras.valor(), 30);

    let como_objetos: Estadisticas = serde_json::from_value(json!({
        "usuarios": {"total": 12},
        "compras": {"total": "30"}
    }))
    .unwrap();
    assert_eq!(como_objetos.usuarios.valor(), 12);
    assert_eq!(como_objetos.compras.valor(), 30);
    assert_eq!(como_objetos.planes_activos, 0);
    assert_eq!(como_objetos.ingresos_totales, 0.0);
}

#[test]
fn test_resumen_abogado() {
    let fila: ResumenAbogado = serde_json::from_value(json!({
        "id": 8,
        "nombre": "Dr. Pérez",
        "email": "perez@x.com",
        "total_consultas": "11",
        "consultas_respondidas": 7
    }))
    .unwrap();
    assert_eq!(fila.total_consultas, 11);
    assert_eq!(fila.consultas_cerradas, 0);
}

#[test]
fn test_cuerpo_error() {
    let cuerpo: CuerpoError =
        serde_json::from_value(json!({"error": "Credenciales inválidas"})).unwrap();
    assert_eq!(cuerpo.error, "Credenciales inválidas");
}

// =========================================================
// Request bodies
// =========================================================

#[test]
fn test_actualizar_consulta_serializa_solo_un_campo() {
    let responder = serde_json::to_value(ActualizarConsulta::responder("Mi respuesta")).unwrap();
    assert_eq!(responder, json!({"respuesta": "Mi respuesta"}));

    let cerrar = serde_json::to_value(ActualizarConsulta::cerrar()).unwrap();
    assert_eq!(cerrar, json!({"cerrar": true}));
}

#[test]
fn test_compra_nueva_arranca_pendiente() {
    let cuerpo = serde_json::to_value(CompraNueva {
        plan_id: 3,
        estado: EstadoCompra::Pendiente,
    })
    .unwrap();
    assert_eq!(cuerpo, json!({"plan_id": 3, "estado": "pendiente"}));
}

#[test]
fn test_plan_nuevo_omite_opcionales() {
    let cuerpo = serde_json::to_value(PlanNuevo {
        nombre: "Básico".into(),
        descripcion: None,
        precio: 1000.0,
        tipo: crate::TipoPlan::Paquete,
        duracion_dias: None,
        cantidad_consultas: 3,
        activo: true,
    })
    .unwrap();
    let mapa = cuerpo.as_object().unwrap();
    assert!(!mapa.contains_key("descripcion"));
    assert!(!mapa.contains_key("duracion_dias"));
    assert_eq!(mapa["tipo"], "paquete");
}

#[test]
fn test_accion_consultas_as_str() {
    assert_eq!(AccionConsultas::Pendientes.as_str(), "pendientes");
    assert_eq!(AccionConsultas::Disponibles.as_str(), "disponibles");
}
