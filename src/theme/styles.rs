//! Global CSS styles for The Identity Codex.
//!
//! Dark laboratory aesthetic. Palette values that change with threat
//! mode arrive as custom properties on `.app-shell`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --void: #050510;
  --panel: rgba(15, 18, 40, 0.72);
  --panel-border: rgba(139, 92, 246, 0.25);

  /* SIGNAL COLOURS */
  --cyan: #22d3ee;
  --cyan-glow: rgba(34, 211, 238, 0.35);
  --purple: #8b5cf6;
  --purple-glow: rgba(139, 92, 246, 0.35);
  --blue: #3b82f6;
  --green: #10b981;
  --red: #f87171;
  --red-glow: rgba(248, 113, 113, 0.4);
  --gold: #fbbf24;
  --silver: #cbd5e1;

  /* TEXT */
  --text-primary: #e2e8f0;
  --text-secondary: rgba(226, 232, 240, 0.72);
  --text-muted: rgba(226, 232, 240, 0.45);

  /* Typography */
  --font-display: 'Orbitron', 'Rajdhani', sans-serif;
  --font-body: 'Inter', 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'Fira Code', 'Consolas', monospace;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 2rem;
  --space-xl: 4rem;

  --radius: 12px;
  --transition: 0.25s ease;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--void);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === App Shell (threat palette + shake) === */
.app-shell {
  min-height: 100vh;
  background: var(--page-bg, var(--void));
  transition: background 0.6s ease;
}

.app-shell[data-tone="threat"] {
  --purple: #ef4444;
  --purple-glow: rgba(239, 68, 68, 0.35);
  --panel-border: rgba(248, 113, 113, 0.35);
}

.app-shell.shake {
  animation: shake var(--shake-ms, 500ms) cubic-bezier(0.36, 0.07, 0.19, 0.97) both;
}

@keyframes shake {
  10%, 90% { transform: translate3d(-2px, 0, 0); }
  20%, 80% { transform: translate3d(4px, 0, 0); }
  30%, 50%, 70% { transform: translate3d(-8px, 0, 0); }
  40%, 60% { transform: translate3d(8px, 0, 0); }
}

.page-title {
  font-family: var(--font-display);
  font-size: 2.75rem;
  letter-spacing: 0.08em;
  background: linear-gradient(90deg, var(--cyan), var(--purple));
  -webkit-background-clip: text;
  color: transparent;
}

.tagline {
  color: var(--text-secondary);
  font-family: var(--font-mono);
}

.section-heading {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-md);
  margin-bottom: var(--space-lg);
}

.section-heading h2 {
  font-family: var(--font-display);
  letter-spacing: 0.06em;
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  backdrop-filter: blur(12px);
  background: rgba(5, 5, 16, 0.7);
  border-bottom: 1px solid var(--panel-border);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1200px;
  margin: 0 auto;
  padding: var(--space-md) var(--space-lg);
}

.navbar-brand {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
  font-family: var(--font-display);
  letter-spacing: 0.1em;
}

.brand-dot {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: var(--cyan);
  box-shadow: 0 0 10px var(--cyan-glow);
}

.brand-dot.alert {
  background: var(--red);
  box-shadow: 0 0 12px var(--red-glow);
  animation: pulse 0.8s infinite;
}

.navbar-links {
  display: flex;
  gap: var(--space-lg);
}

.navbar-link {
  color: var(--text-secondary);
  font-size: 0.9rem;
  transition: color var(--transition);
}

.navbar-link:hover {
  color: var(--cyan);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.4rem;
  cursor: pointer;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  padding: var(--space-md) var(--space-lg);
  border-top: 1px solid var(--panel-border);
}

.mobile-menu-item {
  padding: var(--space-sm) 0;
  color: var(--text-secondary);
}

@media (max-width: 768px) {
  .navbar-links { display: none; }
  .menu-toggle { display: block; }
  .mobile-menu { display: flex; }
}

/* === Buttons === */
.btn-glow, .btn-danger, .btn-ghost {
  padding: 0.7rem 1.6rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.9rem;
  cursor: pointer;
  transition: all var(--transition);
}

.btn-glow {
  background: transparent;
  color: var(--cyan);
  border: 1px solid var(--cyan);
  box-shadow: 0 0 0 transparent;
}

.btn-glow:hover {
  box-shadow: 0 0 18px var(--cyan-glow);
  background: rgba(34, 211, 238, 0.08);
}

.btn-danger {
  background: rgba(248, 113, 113, 0.12);
  color: var(--red);
  border: 1px solid var(--red);
  letter-spacing: 0.12em;
}

.btn-danger:hover {
  background: var(--red);
  color: #150000;
  box-shadow: 0 0 24px var(--red-glow);
}

.btn-ghost {
  background: none;
  color: var(--text-secondary);
  border: 1px solid transparent;
}

.btn-float {
  position: fixed;
  right: var(--space-lg);
  bottom: var(--space-lg);
  width: 48px;
  height: 48px;
  border-radius: 50%;
  border: 1px solid var(--purple);
  background: var(--panel);
  color: var(--text-primary);
  font-size: 1.2rem;
  cursor: pointer;
  z-index: 40;
}

button:disabled {
  opacity: 0.4;
  cursor: not-allowed;
}

/* === Inputs === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
  flex: 1;
}

.input-field {
  padding: 0.7rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--panel-border);
  background: rgba(5, 5, 16, 0.6);
  color: var(--text-primary);
  font-family: var(--font-mono);
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
}

.input-field.invalid {
  border-color: var(--red);
}

.input-error {
  color: var(--red);
  font-size: 0.8rem;
  padding-left: var(--space-md);
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  letter-spacing: 0.1em;
  border: 1px solid currentColor;
}

.badge.live { color: var(--cyan); }
.badge.settled { color: var(--purple); }
.badge.alert { color: var(--red); }

.badge-dot {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: currentColor;
}

.badge-dot.pulse {
  animation: pulse 1.6s infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.3; }
}

/* === Toggle Pills === */
.toggle-pills {
  display: inline-flex;
  padding: 3px;
  border-radius: 999px;
  border: 1px solid var(--panel-border);
}

.pill {
  padding: 0.3rem 1rem;
  border-radius: 999px;
  border: none;
  background: none;
  color: var(--text-muted);
  font-family: var(--font-mono);
  cursor: pointer;
}

.pill.selected {
  background: var(--purple);
  color: #fff;
}

/* === Home / Hero === */
.home {
  max-width: 1200px;
  margin: 0 auto;
  padding: var(--space-xl) var(--space-lg);
  text-align: center;
}

.home-header {
  margin-bottom: var(--space-lg);
}

.home-actions {
  margin-top: var(--space-lg);
}

.hero {
  position: relative;
}

.hero-grid-floor {
  position: absolute;
  inset: 40% 0 0 0;
  background-image:
    linear-gradient(rgba(139, 92, 246, 0.15) 1px, transparent 1px),
    linear-gradient(90deg, rgba(139, 92, 246, 0.15) 1px, transparent 1px);
  background-size: 40px 40px;
  transform: perspective(600px) rotateX(60deg);
  pointer-events: none;
}

.workstation {
  position: relative;
  display: grid;
  grid-template-columns: 1fr auto;
  gap: var(--space-md);
  padding: var(--space-lg);
  border-radius: var(--radius);
  transition: box-shadow 0.4s ease;
}

.workstation.glow {
  box-shadow: 0 0 60px var(--purple-glow), 0 0 120px var(--cyan-glow);
}

.monitor-row {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-md);
}

.monitor {
  background: var(--panel);
  border: 1px solid var(--panel-border);
  border-radius: var(--radius);
  padding: var(--space-md);
  text-align: left;
  min-height: 240px;
}

.monitor-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-sm);
}

.monitor-title {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.monitor-body {
  font-family: var(--font-mono);
  font-size: 0.72rem;
  line-height: 1.5;
}

.scan-good { color: var(--green); }
.scan-critical { color: var(--red); }
.scan-neutral { color: var(--text-secondary); }

.chat-system { color: var(--text-muted); }
.chat-user { color: var(--cyan); }
.chat-jarvis { color: var(--purple); }

.neural-graph {
  width: 100%;
  height: 150px;
}

.neural-edge {
  stroke: rgba(139, 92, 246, 0.4);
  stroke-width: 1;
}

.neural-node {
  filter: drop-shadow(0 0 4px currentColor);
}

.neural-stats {
  display: flex;
  justify-content: space-between;
  font-family: var(--font-mono);
  font-size: 0.7rem;
}

.stat-label { color: var(--text-muted); margin-right: 0.3rem; }
.stat-value { color: var(--cyan); }

.desk {
  grid-column: 1 / -1;
  height: 10px;
  border-radius: 4px;
  background: linear-gradient(90deg, transparent, var(--purple), transparent);
}

.server-rack {
  grid-row: 1;
  grid-column: 2;
  display: flex;
  flex-direction: column;
  gap: 6px;
  padding: var(--space-sm);
  border: 1px solid var(--panel-border);
  border-radius: 6px;
  background: var(--panel);
}

.rack-unit {
  display: flex;
  align-items: center;
  gap: 6px;
  padding: 4px 8px;
  border-radius: 3px;
  background: rgba(0, 0, 0, 0.4);
}

.rack-led {
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background: var(--green);
  animation: pulse 1.2s infinite;
  animation-delay: var(--led-delay, 0ms);
}

.rack-led.dim { background: var(--blue); }

.rack-vent {
  flex: 1;
  height: 4px;
  background: repeating-linear-gradient(90deg, #1e293b 0 3px, transparent 3px 6px);
}

.hero-caption {
  margin-top: var(--space-lg);
  font-size: 1.1rem;
}

.caption-plain { color: var(--text-secondary); }
.caption-purple { color: var(--purple); font-weight: 600; }
.caption-cyan { color: var(--cyan); font-weight: 600; }
.caption-blue { color: var(--blue); font-weight: 600; }

/* === Preloader === */
.preloader {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-md);
  background: var(--void);
}

.preloader-ring {
  width: 72px;
  height: 72px;
  border-radius: 50%;
  border: 3px solid var(--panel-border);
  border-top-color: var(--cyan);
  animation: spin 1s linear infinite;
}

.preloader-line {
  font-family: var(--font-mono);
  color: var(--text-secondary);
  animation: fade-out 0.2s ease forwards;
  animation-delay: var(--fade-delay, 2800ms);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes fade-out {
  to { opacity: 0; }
}

/* === About === */
.about-page {
  position: relative;
  overflow-x: hidden;
}

.about-page.scroll-locked {
  height: 100vh;
  overflow: hidden;
}

.orb-field {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.orb {
  position: absolute;
  width: 420px;
  height: 420px;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.35;
  transition: background 0.6s ease;
}

.orb-0 { top: -120px; left: -100px; }
.orb-1 { top: 40%; right: -140px; }
.orb-2 { bottom: -160px; left: 30%; }

.about {
  position: relative;
  max-width: 1100px;
  margin: 0 auto;
  padding: var(--space-xl) var(--space-lg);
  display: flex;
  flex-direction: column;
  gap: var(--space-xl);
}

.identity-card {
  display: flex;
  align-items: center;
  gap: var(--space-lg);
  padding: var(--space-lg);
  border-radius: var(--radius);
  border: 1px solid var(--panel-border);
  background: var(--panel);
}

.identity-photo {
  position: relative;
  width: 180px;
  height: 180px;
  border-radius: var(--radius);
  overflow: hidden;
  flex-shrink: 0;
}

.identity-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.identity-scanline {
  position: absolute;
  left: 0;
  right: 0;
  height: 2px;
  background: var(--cyan);
  box-shadow: 0 0 12px var(--cyan);
  animation: scan 3s linear infinite;
}

@keyframes scan {
  from { top: 0; }
  to { top: 100%; }
}

.identity-eyebrow {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--purple);
}

.identity-text h1 { font-family: var(--font-display); }
.identity-text h2 { color: var(--cyan); font-size: 1.1rem; }
.identity-text p { color: var(--text-secondary); }

/* === Origin === */
.directives {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-md);
  margin-bottom: var(--space-lg);
}

.directive {
  padding: var(--space-md);
  border-left: 2px solid var(--purple);
}

.directive h3 {
  font-family: var(--font-mono);
  font-size: 0.9rem;
  color: var(--purple);
}

.origin-cards {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-lg);
}

.origin-card {
  padding: var(--space-lg);
  border-radius: var(--radius);
  border: 1px solid var(--panel-border);
  background: var(--panel);
  cursor: pointer;
  transition: all var(--transition);
}

.origin-card.jarvis:hover, .origin-card.jarvis.unlocked {
  border-color: var(--cyan);
  box-shadow: 0 0 24px var(--cyan-glow);
}

.origin-card.ultron:hover, .origin-card.ultron.unlocked {
  border-color: var(--red);
  box-shadow: 0 0 24px var(--red-glow);
}

.origin-card-header {
  display: flex;
  align-items: baseline;
  gap: var(--space-sm);
  flex-wrap: wrap;
}

.origin-card-tagline {
  color: var(--text-muted);
  font-size: 0.85rem;
}

.lock-glyph {
  margin-left: auto;
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--text-muted);
}

.origin-links {
  list-style: none;
  max-height: 0;
  overflow: hidden;
  transition: max-height 0.4s ease, margin 0.4s ease;
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.origin-card.unlocked .origin-links {
  max-height: 200px;
  margin-top: var(--space-md);
}

.origin-links li::before {
  content: "> ";
  color: var(--purple);
}

.kill-panel {
  margin-top: var(--space-lg);
  padding: var(--space-lg);
  border-radius: var(--radius);
  border: 1px solid var(--red);
  background: rgba(248, 113, 113, 0.06);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-lg);
}

.transmission-source {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--cyan);
}

.typewriter, .decrypt {
  font-family: var(--font-mono);
}

.caret {
  margin-left: 2px;
  animation: pulse 0.8s step-end infinite;
}

/* === Experience Circuit === */
.uptime {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--green);
}

.circuit {
  display: flex;
  flex-direction: column;
}

.circuit-node {
  display: flex;
  flex-direction: column;
  align-items: stretch;
}

.circuit-card {
  padding: var(--space-md) var(--space-lg);
  border-radius: var(--radius);
  border: 1px solid var(--panel-border);
  background: var(--panel);
  transition: all var(--transition);
}

.circuit-card.hovered {
  border-color: var(--cyan);
  box-shadow: 0 0 28px var(--cyan-glow);
  transform: translateX(6px);
}

.circuit-card-top {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.circuit-date {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.circuit-card h4 { color: var(--cyan); font-weight: 500; }
.circuit-subtitle { color: var(--text-muted); font-size: 0.85rem; }

.circuit-details {
  max-height: 0;
  overflow: hidden;
  padding-left: var(--space-lg);
  transition: max-height 0.35s ease;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.circuit-details.open {
  max-height: 400px;
  margin-top: var(--space-sm);
}

.circuit-connector {
  align-self: center;
  width: 2px;
  height: 36px;
  background: var(--panel-border);
  transition: all var(--transition);
}

.circuit-connector.lit {
  background: var(--cyan);
  box-shadow: 0 0 10px var(--cyan);
}

/* === Trophy Case === */
.trophy-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-md);
}

.trophy {
  padding: var(--space-lg);
  border-radius: var(--radius);
  border: 1px solid var(--panel-border);
  background: var(--panel);
  text-align: center;
}

.trophy.gold { border-color: var(--gold); }
.trophy.silver { border-color: var(--silver); }
.trophy.violet { border-color: var(--purple); }

.trophy-icon { font-size: 2rem; }

.trophy-score {
  display: inline-block;
  margin-top: var(--space-sm);
  font-family: var(--font-mono);
  color: var(--gold);
}

/* === Footer === */
.site-footer {
  position: relative;
  padding: var(--space-xl) var(--space-lg) var(--space-lg);
  border-top: 1px solid var(--panel-border);
}

.footer-grid {
  max-width: 1100px;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr 1.4fr 1fr;
  gap: var(--space-lg);
}

.footer-role { color: var(--cyan); }
.footer-affiliation { color: var(--text-muted); font-size: 0.85rem; }

.subscribe-label {
  display: block;
  margin-bottom: var(--space-sm);
  font-family: var(--font-mono);
  color: var(--text-secondary);
}

.subscribe-row {
  display: flex;
  gap: var(--space-sm);
  align-items: flex-start;
}

.footer-socials {
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.social-link {
  display: flex;
  gap: var(--space-sm);
  color: var(--text-secondary);
  transition: color var(--transition);
}

.social-link:hover { color: var(--cyan); }

.copyright {
  margin-top: var(--space-lg);
  text-align: center;
  color: var(--text-muted);
  font-size: 0.8rem;
}

/* === Research === */
.research {
  max-width: 1200px;
  margin: 0 auto;
  padding: var(--space-xl) var(--space-lg);
}

.research-header {
  margin-bottom: var(--space-lg);
}

.research-layout {
  display: grid;
  grid-template-columns: 240px 1fr;
  gap: var(--space-lg);
}

.project-index {
  position: sticky;
  top: 96px;
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
}

.project-index-title {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.project-index-link {
  display: flex;
  flex-direction: column;
  padding: var(--space-sm);
  border-left: 2px solid var(--accent, var(--purple));
}

.project-index-label {
  font-family: var(--font-mono);
  font-size: 0.7rem;
  color: var(--accent, var(--purple));
}

.project {
  padding: var(--space-lg);
  margin-bottom: var(--space-xl);
  border-radius: var(--radius);
  border: 1px solid var(--panel-border);
  background: var(--panel);
}

.project-eyebrow {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--accent, var(--purple));
}

.project-title {
  font-family: var(--font-display);
  margin-bottom: var(--space-md);
}

.project-meta {
  display: grid;
  gap: var(--space-xs);
  margin-bottom: var(--space-md);
}

.project-meta-row {
  display: flex;
  gap: var(--space-sm);
  font-size: 0.85rem;
}

.project-meta-row dt { color: var(--text-muted); min-width: 100px; }

.project-image {
  width: 100%;
  border-radius: var(--radius);
  margin-bottom: var(--space-md);
}

.project-summary {
  color: var(--text-secondary);
  margin-bottom: var(--space-md);
}

.collapsible {
  border-top: 1px solid var(--panel-border);
}

.collapsible-header {
  width: 100%;
  display: flex;
  justify-content: space-between;
  padding: var(--space-md) 0;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1rem;
  cursor: pointer;
}

.collapsible-body {
  padding-bottom: var(--space-md);
  color: var(--text-secondary);
}

.collapsible-body ul {
  padding-left: var(--space-lg);
}

.qa + .qa { margin-top: var(--space-md); }
.qa h4 { color: var(--accent, var(--cyan)); }

/* === Results === */
.results {
  margin: var(--space-lg) 0;
  padding: var(--space-lg);
  border-radius: var(--radius);
  background: rgba(0, 0, 0, 0.3);
}

.results-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-md);
}

.bar-legend {
  display: flex;
  gap: var(--space-md);
  font-size: 0.8rem;
  margin-bottom: var(--space-md);
}

.legend-item {
  display: inline-flex;
  align-items: center;
  gap: var(--space-xs);
}

.legend-swatch {
  width: 10px;
  height: 10px;
  border-radius: 2px;
}

.bar-chart {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-lg);
  height: 240px;
  align-items: end;
}

.bar-group {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.bars {
  flex: 1;
  display: flex;
  align-items: flex-end;
  gap: 6px;
}

.bar {
  flex: 1;
  position: relative;
  border-radius: 4px 4px 0 0;
  transition: height 0.5s ease;
}

.bar-value {
  position: absolute;
  top: -1.2rem;
  left: 0;
  right: 0;
  text-align: center;
  font-family: var(--font-mono);
  font-size: 0.7rem;
}

.bar-condition {
  margin-top: var(--space-sm);
  text-align: center;
  font-size: 0.8rem;
  color: var(--text-muted);
}

.pattern-table {
  width: 100%;
  margin-top: var(--space-lg);
  border-collapse: collapse;
  font-family: var(--font-mono);
  font-size: 0.8rem;
}

.pattern-table th, .pattern-table td {
  padding: var(--space-sm);
  border-bottom: 1px solid var(--panel-border);
  text-align: left;
}

.pattern-table td.highlight {
  color: var(--cyan);
  font-weight: 700;
}

/* === Connect === */
.connect {
  min-height: 80vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-lg);
}

.connect-panel {
  max-width: 520px;
  padding: var(--space-xl) var(--space-lg);
  border-radius: var(--radius);
  border: 1px dashed var(--panel-border);
  background: var(--panel);
  text-align: center;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-md);
}

/* === Responsive === */
@media (max-width: 900px) {
  .monitor-row, .directives, .origin-cards, .trophy-grid, .footer-grid {
    grid-template-columns: 1fr;
  }
  .workstation { grid-template-columns: 1fr; }
  .server-rack { grid-row: auto; grid-column: auto; }
  .research-layout { grid-template-columns: 1fr; }
  .project-index { position: static; }
  .identity-card, .kill-panel { flex-direction: column; text-align: center; }
}
"#;
