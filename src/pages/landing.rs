use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::snowflake::Snowfall;
use crate::components::tilt_card::TiltCard;
use crate::config::LandingConfig;
use crate::effects::parallax::{self, Viewport};
use crate::effects::pointer::use_pointer_position;

const GALLERY: [(&str, &str, &str); 6] = [
    ("🎄", "Новогодняя ёлка", "Украшенная игрушками и гирляндами"),
    ("🎁", "Подарки", "Для каждого найдется что-то особенное"),
    ("⛷️", "Зимние забавы", "Катание на санках и коньках"),
    ("🏔️", "Снежные горы", "Величественные заснеженные вершины"),
    ("🦌", "Северные олени", "Верные помощники Деда Мороза"),
    ("✨", "Волшебство", "Сказка становится реальностью"),
];

const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/19309753-f764-4683-99d6-3c7295d9a35c/files/7fe970d2-b64a-4c0c-9efe-ed8017464de2.jpg";

#[function_component(Landing)]
pub fn landing() -> Html {
    let flakes = use_search_param("flakes".to_string());
    let config = use_state(move || LandingConfig::from_flakes_param(flakes.as_deref()));

    let pointer = use_pointer_position();
    let (width, height) = use_window_size();
    let offset = parallax::offset(pointer, Viewport::new(width, height), config.parallax_damping);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The form is decorative; there is nowhere to send it.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted, nothing to send it to");
    });

    let max_tilt_deg = config.max_tilt_deg;

    html! {
        <div class="winter-page">
            <div class="parallax-layer" style={format!("transform: {};", offset.transform())}>
                <div class="parallax-orb parallax-orb--purple"></div>
                <div class="parallax-orb parallax-orb--blue"></div>
            </div>
            <Snowfall preset={config.snowfall} />
            <div class="winter-page__shade"></div>

            <div class="winter-page__content">
                <header class="site-header fade-in">
                    <div class="site-header__logo">
                        <span class="float">{"❄️"}</span>
                        <h1>{"Зимняя Сказка"}</h1>
                    </div>
                    <nav class="site-header__nav">
                        <a href="#about">{"О нас"}</a>
                        <a href="#gallery">{"Галерея"}</a>
                        <a href="#contact">{"Контакты"}</a>
                    </nav>
                </header>

                <section class="hero">
                    <div class="hero__text fade-in">
                        <h2>
                            {"Волшебство"}
                            <br />
                            <span class="shimmer">{"Нового Года"}</span>
                        </h2>
                        <p>
                            {"Окунитесь в атмосферу сказочного зимнего леса, где Дед Мороз и Снегурочка готовят волшебные подарки для всех детей и взрослых!"}
                        </p>
                        <div class="hero__actions">
                            <button class="cta cta--primary">{"🎁 Заказать подарок"}</button>
                            <button class="cta cta--outline">{"✨ Узнать больше"}</button>
                        </div>
                    </div>
                    <div class="hero__visual fade-in" style="animation-delay: 0.3s;">
                        <div class="hero__glow"></div>
                        <TiltCard class="hero__card" counted={false} {max_tilt_deg}>
                            <img src={HERO_IMAGE} alt="Дед Мороз и Снегурочка в зимнем лесу" />
                        </TiltCard>
                    </div>
                </section>

                <section id="about" class="section">
                    <h3 class="fade-in">{"Наши герои"}</h3>
                    <div class="grid grid--two">
                        <TiltCard class="card card--purple" icon="🎅" {max_tilt_deg}>
                            <h4>{"Дед Мороз"}</h4>
                            <p>{"Добрый волшебник с белой бородой, который дарит радость и исполняет самые заветные желания детей со всего мира."}</p>
                        </TiltCard>
                        <TiltCard class="card card--blue" icon="👸" {max_tilt_deg}>
                            <h4>{"Снегурочка"}</h4>
                            <p>{"Внучка Деда Мороза, прекрасная снежная девушка, которая помогает дедушке развозить подарки и создает праздничное настроение."}</p>
                        </TiltCard>
                    </div>
                </section>

                <section id="gallery" class="section">
                    <h3 class="fade-in">{"Зимние чудеса"}</h3>
                    <div class="grid grid--three">
                        { for GALLERY.iter().enumerate().map(|(index, (icon, title, desc))| html! {
                            <TiltCard
                                key={index}
                                class="card card--orange fade-in-soft"
                                icon={*icon}
                                animation_delay_s={index as f64 * 0.1}
                                {max_tilt_deg}
                            >
                                <h5>{*title}</h5>
                                <p>{*desc}</p>
                            </TiltCard>
                        })}
                    </div>
                </section>

                <section id="contact" class="section section--last">
                    <h3 class="fade-in">{"Напишите Деду Морозу"}</h3>
                    <form class="contact-form" {onsubmit}>
                        <input type="text" placeholder="Ваше имя" />
                        <input type="email" placeholder="Email" />
                        <textarea placeholder="Ваше желание..." rows="5" />
                        <button type="submit" class="cta cta--warm">{"✉️ Отправить письмо"}</button>
                    </form>
                </section>

                <footer class="site-footer">
                    <p>{"© 2024 Зимняя Сказка. Все права защищены."}</p>
                    <div class="site-footer__links">
                        <a href="#">{"Facebook"}</a>
                        <a href="#">{"Instagram"}</a>
                        <a href="#">{"Twitter"}</a>
                    </div>
                </footer>
            </div>

            <style>
                {r#"
                .winter-page {
                    min-height: 100vh;
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #1e3a8a, #1e40af, #581c87);
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .parallax-layer {
                    position: absolute;
                    inset: -40px;
                    pointer-events: none;
                    transition: transform 0.2s ease-out;
                }

                .parallax-orb {
                    position: absolute;
                    width: 420px;
                    height: 420px;
                    border-radius: 50%;
                    filter: blur(90px);
                    opacity: 0.35;
                }

                .parallax-orb--purple { top: 10%; left: 8%; background: #9333ea; }
                .parallax-orb--blue { bottom: 15%; right: 6%; background: #2563eb; }

                .snowfall {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }

                .snowflake {
                    position: absolute;
                    top: -40px;
                    font-size: 1.5rem;
                    opacity: 0.8;
                    animation-name: snowfall;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }

                .winter-page__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, transparent, rgba(0, 0, 0, 0.2));
                    pointer-events: none;
                }

                .winter-page__content {
                    position: relative;
                    z-index: 10;
                }

                .site-header {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .site-header__logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 2.25rem;
                }

                .site-header__logo h1 { font-size: 1.75rem; margin: 0; }

                .site-header__nav { display: flex; gap: 1.5rem; }

                .site-header__nav a,
                .site-footer a {
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .site-header__nav a:hover,
                .site-footer a:hover { color: #ffffff; }

                .hero {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 1rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero__text h2 {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .hero__text p {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: rgba(255, 255, 255, 0.8);
                }

                .shimmer {
                    background: linear-gradient(90deg, #60a5fa, #c084fc, #f472b6, #60a5fa);
                    background-size: 200% auto;
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: shimmer 3s linear infinite;
                }

                .hero__actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1rem;
                }

                .cta {
                    padding: 1.25rem 2rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border-radius: 8px;
                    color: #ffffff;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .cta:hover { transform: scale(1.05); }

                .cta--primary {
                    border: none;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    box-shadow: 0 20px 40px rgba(147, 51, 234, 0.3);
                }

                .cta--outline {
                    border: 2px solid #ffffff;
                    background: transparent;
                    backdrop-filter: blur(4px);
                }

                .cta--outline:hover { background: #ffffff; color: #581c87; }

                .cta--warm {
                    width: 100%;
                    border: none;
                    font-weight: 700;
                    background: linear-gradient(90deg, #f97316, #db2777);
                }

                .hero__visual { position: relative; }

                .hero__glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 24px;
                    background: linear-gradient(90deg, #9333ea, #2563eb);
                    filter: blur(64px);
                    opacity: 0.3;
                    animation: pulse 2s ease-in-out infinite;
                }

                .hero__card {
                    position: relative;
                    overflow: hidden;
                    aspect-ratio: 1 / 1;
                    border: 4px solid rgba(255, 255, 255, 0.2);
                    border-radius: 24px;
                }

                .hero__card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 1rem;
                    text-align: center;
                }

                .section--last { max-width: 640px; padding-bottom: 8rem; }

                .section h3 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 3rem;
                }

                .grid { display: grid; gap: 2rem; }
                .grid--two { grid-template-columns: repeat(2, 1fr); }
                .grid--three { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }

                .tilt-card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                    transition: transform 0.15s ease-out, box-shadow 0.3s ease, border-color 0.3s ease;
                    will-change: transform;
                }

                .card {
                    padding: 2rem;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    border-radius: 12px;
                    cursor: pointer;
                    user-select: none;
                }

                .card p { color: rgba(255, 255, 255, 0.75); line-height: 1.6; }

                .card--purple.hovered { border-color: rgba(192, 132, 252, 0.5); box-shadow: 0 25px 50px rgba(168, 85, 247, 0.2); }
                .card--blue.hovered { border-color: rgba(96, 165, 250, 0.5); box-shadow: 0 25px 50px rgba(59, 130, 246, 0.2); }
                .card--orange.hovered { border-color: rgba(251, 146, 60, 0.5); box-shadow: 0 20px 40px rgba(249, 115, 22, 0.2); }

                .tilt-card__icon {
                    display: inline-block;
                    font-size: 4rem;
                    margin-bottom: 1rem;
                    transition: transform 0.3s ease;
                }

                .tilt-card__glyph { display: inline-block; }
                .tilt-card.hovered .tilt-card__glyph { animation: float 3s ease-in-out infinite; }

                .click-badge {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    min-width: 1.75rem;
                    padding: 0.2rem 0.5rem;
                    border-radius: 999px;
                    background: #db2777;
                    font-weight: 700;
                    transition: transform 0.2s ease;
                }

                .click-badge.pop { transform: scale(1.4); }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    padding: 3rem;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                }

                .contact-form input,
                .contact-form textarea {
                    padding: 1rem 1.5rem;
                    border-radius: 12px;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.2);
                    color: #ffffff;
                    font-size: 1rem;
                    resize: none;
                }

                .contact-form input:focus,
                .contact-form textarea:focus { outline: none; border-color: #c084fc; }

                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2rem 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: rgba(255, 255, 255, 0.7);
                }

                .site-footer__links { display: flex; gap: 1rem; }

                .fade-in { animation: fadeIn 0.6s ease-out both; }
                .fade-in-soft { animation: fadeOpacity 0.6s ease-out backwards; }
                .float { display: inline-block; animation: float 3s ease-in-out infinite; }

                @keyframes snowfall {
                    from { transform: translateY(0) rotate(0deg); }
                    to { transform: translateY(110vh) rotate(360deg); }
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }

                @keyframes shimmer {
                    from { background-position: 0% center; }
                    to { background-position: 200% center; }
                }

                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes fadeOpacity {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 0.15; }
                }

                @media (max-width: 768px) {
                    .site-header__nav { display: none; }
                    .hero { grid-template-columns: 1fr; padding: 5rem 1rem; }
                    .hero__text h2 { font-size: 3rem; }
                    .grid--two, .grid--three { grid-template-columns: 1fr; }
                    .site-footer { flex-direction: column; gap: 1rem; }
                }
                "#}
            </style>
        </div>
    }
}
