//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;

struct Caracteristica {
    titulo: &'static str,
    descripcion: &'static str,
}

const CARACTERISTICAS: [Caracteristica; 4] = [
    Caracteristica {
        titulo: "Consultas Legales",
        descripcion: "Accede a asesoría legal profesional cuando la necesites",
    },
    Caracteristica {
        titulo: "Seguro y Confiable",
        descripcion: "Tus datos están protegidos con los más altos estándares",
    },
    Caracteristica {
        titulo: "Rápido y Fácil",
        descripcion: "Consulta con abogados en minutos desde cualquier lugar",
    },
    Caracteristica {
        titulo: "Expertos Calificados",
        descripcion: "Abogados profesionales listos para ayudarte",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="hero bg-primary text-primary-content rounded-box py-16 mb-12">
                <div class="hero-content text-center flex-col">
                    <h1 class="text-5xl font-bold">"Tu Abogado en Línea"</h1>
                    <p class="text-xl mb-4">"Asesoría legal profesional a un clic de distancia"</p>
                    <div class="flex gap-4">
                        <A href="/planes" attr:class="btn btn-secondary btn-lg">"Ver Planes"</A>
                        <A href="/register" attr:class="btn btn-outline btn-lg">"Registrarse"</A>
                    </div>
                </div>
            </div>

            <h2 class="text-3xl font-bold text-center mb-8">"¿Por qué elegirnos?"</h2>

            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6 mb-12">
                {CARACTERISTICAS
                    .iter()
                    .map(|c| {
                        view! {
                            <div class="card bg-base-100 shadow-md text-center">
                                <div class="card-body items-center">
                                    <h3 class="card-title">{c.titulo}</h3>
                                    <p class="text-sm opacity-70">{c.descripcion}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card bg-primary text-primary-content text-center p-8">
                <h2 class="text-2xl font-bold mb-2">"¿Listo para comenzar?"</h2>
                <p class="mb-4">
                    "Elige el plan que mejor se adapte a tus necesidades y obtén asesoría \
                     legal profesional hoy mismo."
                </p>
                <div>
                    <A href="/planes" attr:class="btn btn-secondary btn-lg">
                        "Ver Planes Disponibles"
                    </A>
                </div>
            </div>
        </Layout>
    }
}
