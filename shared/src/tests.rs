use super::*;
use crate::validacion::*;

// =========================================================
// Roles and navigation targets
// =========================================================

#[test]
fn test_rol_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Rol::Cliente).unwrap(), "\"cliente\"");
    assert_eq!(serde_json::to_string(&Rol::Abogado).unwrap(), "\"abogado\"");
    let r: Rol = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(r, Rol::Admin);
}

#[test]
fn test_rol_desconocido_no_parsea() {
    assert!(serde_json::from_str::<Rol>("\"superuser\"").is_err());
}

#[test]
fn test_panel_path_por_rol() {
    assert_eq!(Rol::Cliente.panel_path(), "/panel-cliente");
    assert_eq!(Rol::Abogado.panel_path(), "/panel-abogado");
    assert_eq!(Rol::Admin.panel_path(), "/panel-admin");
}

#[test]
fn test_admin_no_asignable_en_registro() {
    assert!(Rol::Cliente.asignable_en_registro());
    assert!(Rol::Abogado.asignable_en_registro());
    assert!(!Rol::Admin.asignable_en_registro());
}

// =========================================================
// Route guard policy
// =========================================================

#[test]
fn test_guardia_durante_bootstrap() {
    // While the session restore runs, nothing guarded may render.
    let acceso = decidir_acceso(true, false, None, &[Rol::Cliente]);
    assert_eq!(acceso, Acceso::Cargando);
    // Even for a session that would otherwise pass.
    let acceso = decidir_acceso(true, true, Some(Rol::Cliente), &[Rol::Cliente]);
    assert_eq!(acceso, Acceso::Cargando);
}

#[test]
fn test_guardia_sin_sesion_redirige_siempre() {
    for permitidos in [&[Rol::Cliente][..], &[Rol::Abogado], &[Rol::Admin], &[]] {
        let acceso = decidir_acceso(false, false, None, permitidos);
        assert_eq!(acceso, Acceso::RedirigirLogin);
    }
}

#[test]
fn test_guardia_rol_equivocado_redirige_a_inicio() {
    let acceso = decidir_acceso(false, true, Some(Rol::Abogado), &[Rol::Cliente]);
    assert_eq!(acceso, Acceso::RedirigirInicio);
    let acceso = decidir_acceso(false, true, Some(Rol::Cliente), &[Rol::Admin]);
    assert_eq!(acceso, Acceso::RedirigirInicio);
    // Token present but no user object: both keys are required together.
    let acceso = decidir_acceso(false, true, None, &[Rol::Cliente]);
    assert_eq!(acceso, Acceso::RedirigirInicio);
}

#[test]
fn test_guardia_rol_permitido() {
    let acceso = decidir_acceso(false, true, Some(Rol::Admin), &[Rol::Admin]);
    assert_eq!(acceso, Acceso::Permitir);
}

// =========================================================
// Consultation lifecycle predicates
// =========================================================

#[test]
fn test_ciclo_de_vida_consulta() {
    assert!(EstadoConsulta::Abierta.puede_responder());
    assert!(EstadoConsulta::Respondida.puede_responder());
    assert!(!EstadoConsulta::Cerrada.puede_responder());

    assert!(!EstadoConsulta::Abierta.puede_cerrar());
    assert!(EstadoConsulta::Respondida.puede_cerrar());
    assert!(!EstadoConsulta::Cerrada.puede_cerrar());

    assert!(EstadoConsulta::Cerrada.es_terminal());
    assert!(!EstadoConsulta::Abierta.es_terminal());
}

// =========================================================
// Model decoding against PHP-flavored JSON
// =========================================================

#[test]
fn test_plan_con_numeros_como_cadenas() {
    let json = r#"{
        "id": "3",
        "nombre": "Paquete Básico",
        "precio": "1500.50",
        "tipo": "paquete",
        "cantidad_consultas": "5",
        "activo": 1
    }"#;
    let plan: Plan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.id, 3);
    assert_eq!(plan.precio, 1500.50);
    assert_eq!(plan.cantidad_consultas, 5);
    assert!(plan.activo);
    assert!(plan.descripcion.is_none());
    assert!(plan.duracion_dias.is_none());
}

#[test]
fn test_plan_suscripcion_completo() {
    let json = r#"{
        "id": 7,
        "nombre": "Suscripción Mensual",
        "descripcion": "Consultas ilimitadas... casi",
        "precio": 9900,
        "tipo": "suscripcion",
        "duracion_dias": 30,
        "cantidad_consultas": 10,
        "activo": false
    }"#;
    let plan: Plan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.tipo, TipoPlan::Suscripcion);
    assert_eq!(plan.duracion_dias, Some(30));
    assert!(!plan.activo);
}

#[test]
fn test_compra_estado_desconocido_cae_en_otra() {
    let json = r#"{"id": 1, "estado": "en_revision"}"#;
    let compra: Compra = serde_json::from_str(json).unwrap();
    assert_eq!(compra.estado, EstadoCompra::Otra);
    assert_eq!(compra.consultas_disponibles, 0);
    assert_eq!(compra.consultas_totales, 0);
}

#[test]
fn test_compra_completa() {
    let json = r#"{
        "id": 9,
        "usuario_id": 2,
        "plan_id": 3,
        "plan_nombre": "Paquete Básico",
        "monto": "4500.00",
        "estado": "pagada",
        "fecha_compra": "2024-05-01 13:45:00",
        "consultas_disponibles": 2,
        "consultas_totales": 5,
        "consultas_usadas": 3
    }"#;
    let compra: Compra = serde_json::from_str(json).unwrap();
    assert_eq!(compra.estado, EstadoCompra::Pagada);
    assert_eq!(compra.monto, 4500.0);
    assert_eq!(compra.consultas_usadas, Some(3));
}

#[test]
fn test_campos_opcionales_rechazan_no_enteros() {
    // The optional id/count fields apply the same integer validation as the
    // required ones: negative or fractional values are decode errors, not
    // silent truncations.
    let negativo = r#"{"id": 1, "asunto": "A", "estado": "abierta", "cliente_id": "-3"}"#;
    assert!(serde_json::from_str::<Consulta>(negativo).is_err());

    let fraccional = r#"{
        "id": 1,
        "nombre": "P",
        "precio": 100,
        "tipo": "paquete",
        "cantidad_consultas": 1,
        "duracion_dias": 2.5
    }"#;
    assert!(serde_json::from_str::<Plan>(fraccional).is_err());

    let valido = r#"{"id": 1, "asunto": "A", "estado": "abierta", "cliente_id": "3"}"#;
    let consulta: Consulta = serde_json::from_str(valido).unwrap();
    assert_eq!(consulta.cliente_id, Some(3));
}

#[test]
fn test_consulta_minima_y_completa() {
    let minima: Consulta =
        serde_json::from_str(r#"{"id": 1, "asunto": "Despido", "estado": "abierta"}"#).unwrap();
    assert_eq!(minima.estado, EstadoConsulta::Abierta);
    assert!(minima.respuesta.is_none());
    assert!(minima.abogado_nombre.is_none());

    let completa: Consulta = serde_json::from_str(
        r#"{
            "id": 2,
            "cliente_id": 4,
            "abogado_id": 8,
            "cliente_nombre": "Ana",
            "abogado_nombre": "Dr. Pérez",
            "asunto": "Contrato de arriendo",
            "mensaje_inicial": "Tengo una duda sobre la cláusula 4",
            "respuesta": "La cláusula es válida",
            "estado": "respondida",
            "fecha_creacion": "2024-05-02 09:00:00"
        }"#,
    )
    .unwrap();
    assert_eq!(completa.estado, EstadoConsulta::Respondida);
    assert_eq!(completa.abogado_nombre.as_deref(), Some("Dr. Pérez"));
}

// =========================================================
// Form validation (a failure here never produces a request)
// =========================================================

fn form_base<'a>() -> FormularioRegistro<'a> {
    FormularioRegistro {
        nombre: "Ana",
        email: "ana@x.com",
        password: "secret1",
        confirmar: "secret1",
        rol: Rol::Cliente,
    }
}

#[test]
fn test_registro_valido() {
    let req = validar_registro(&form_base()).unwrap();
    assert_eq!(req.nombre, "Ana");
    assert_eq!(req.rol, Rol::Cliente);
}

#[test]
fn test_registro_contrasenas_distintas() {
    let mut form = form_base();
    form.confirmar = "otracosa";
    let err = validar_registro(&form).unwrap_err();
    assert_eq!(err, "Las contraseñas no coinciden");
}

#[test]
fn test_registro_contrasena_corta() {
    let mut form = form_base();
    form.password = "abc";
    form.confirmar = "abc";
    let err = validar_registro(&form).unwrap_err();
    assert_eq!(err, "La contraseña debe tener al menos 6 caracteres");
}

#[test]
fn test_registro_campos_vacios() {
    let mut form = form_base();
    form.email = "  ";
    assert!(validar_registro(&form).is_err());
}

#[test]
fn test_registro_rol_admin_bloqueado() {
    let mut form = form_base();
    form.rol = Rol::Admin;
    assert_eq!(validar_registro(&form).unwrap_err(), "Rol no permitido");
}

#[test]
fn test_login_requiere_campos() {
    assert!(validar_login("", "secret1").is_err());
    assert!(validar_login("ana@x.com", "").is_err());
    let req = validar_login(" ana@x.com ", "secret1").unwrap();
    assert_eq!(req.email, "ana@x.com");
}

#[test]
fn test_nueva_consulta_requiere_compra() {
    let err = validar_nueva_consulta(None, "Asunto", "Mensaje").unwrap_err();
    assert_eq!(err, "Todos los campos son obligatorios");
    assert!(validar_nueva_consulta(Some(1), "", "Mensaje").is_err());
    let ok = validar_nueva_consulta(Some(1), " Asunto ", "Mensaje").unwrap();
    assert_eq!(ok.compra_id, 1);
    assert_eq!(ok.asunto, "Asunto");
}

#[test]
fn test_respuesta_vacia_bloqueada() {
    assert!(validacion::validar_respuesta("   ").is_err());
    assert_eq!(validacion::validar_respuesta(" texto ").unwrap(), "texto");
}

// =========================================================
// Dates
// =========================================================

#[test]
fn test_fecha_formatos() {
    assert_eq!(
        fecha::fecha_hora(Some("2024-05-01 13:45:00")),
        "01/05/2024 13:45"
    );
    assert_eq!(
        fecha::fecha_hora(Some("2024-05-01T13:45:00")),
        "01/05/2024 13:45"
    );
    assert_eq!(fecha::fecha_corta(Some("2024-05-01 13:45:00")), "01/05/2024");
    assert_eq!(fecha::fecha_corta(Some("2024-05-01")), "01/05/2024");
    assert_eq!(fecha::fecha_hora(None), "-");
    assert_eq!(fecha::fecha_hora(Some("no es una fecha")), "-");
}
