//! Orientierte Strecke in impliziter Form `a·x + b·y + c = 0` und die
//! Geometrie-Algorithmen darauf (Schnittpunkt, Winkel, Spiegelung, Abprall).

use glam::DVec2;

/// Orientierte Strecke A→B mit gecachten Koeffizienten der Geradengleichung
///
/// Die Koeffizienten werden nur von den Konstruktoren bzw. `refresh` gesetzt,
/// damit sie immer zu den Endpunkten passen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Startpunkt A (Ursprung der Strahlrichtung)
    pub point_a: DVec2,
    /// Endpunkt B
    pub point_b: DVec2,
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Gerade durch zwei Punkte (Zwei-Punkte-Form)
    pub fn from_two_points(point_a: DVec2, point_b: DVec2) -> Self {
        let (a, b, c) = Self::coefficients_for(point_a, point_b);
        Self {
            point_a,
            point_b,
            a,
            b,
            c,
        }
    }

    /// Gerade durch `point` mit Normalenvektor `normal`.
    ///
    /// Der zweite Endpunkt liegt um den um 90° gedrehten Normalenvektor versetzt.
    pub fn from_point_and_normal(point: DVec2, normal: DVec2) -> Self {
        Self {
            point_a: point,
            point_b: DVec2::new(point.x - normal.y, point.y + normal.x),
            a: normal.x,
            b: normal.y,
            c: -normal.x * point.x - normal.y * point.y,
        }
    }

    /// Gerade durch `point` mit Richtungsvektor `direction`.
    ///
    /// Der synthetische Endpunkt B liegt bei `point + direction`.
    pub fn from_point_and_vector(point: DVec2, direction: DVec2) -> Self {
        Self {
            point_a: point,
            point_b: point + direction,
            a: -direction.y,
            b: direction.x,
            c: direction.y * point.x - direction.x * point.y,
        }
    }

    fn coefficients_for(point_a: DVec2, point_b: DVec2) -> (f64, f64, f64) {
        let a = point_a.y - point_b.y;
        let b = point_b.x - point_a.x;
        let c = -a * point_a.x - b * point_a.y;
        (a, b, c)
    }

    /// Übernimmt neue Endpunkt-Positionen und berechnet die Koeffizienten neu
    pub fn refresh(&mut self, point_a: DVec2, point_b: DVec2) {
        self.point_a = point_a;
        self.point_b = point_b;
        (self.a, self.b, self.c) = Self::coefficients_for(point_a, point_b);
    }

    /// Normalenvektor `(a, b)`
    pub fn normal(&self) -> DVec2 {
        DVec2::new(self.a, self.b)
    }

    /// Richtungsvektor B - A
    pub fn direction(&self) -> DVec2 {
        self.point_b - self.point_a
    }

    /// Wert von `a·x + b·y + c` (0 für Punkte auf der Geraden)
    pub fn evaluate(&self, p: DVec2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Schnittpunkt zweier Geraden.
    ///
    /// `None` bei exakt verschwindender Determinante (parallel oder identisch).
    pub fn intersect(&self, other: &Line) -> Option<DVec2> {
        let denominator = self.a * other.b - other.a * self.b;
        if denominator == 0.0 {
            return None;
        }
        Some(DVec2::new(
            (self.b * other.c - self.c * other.b) / denominator,
            -(self.a * other.c - other.a * self.c) / denominator,
        ))
    }

    /// Winkel zwischen den Normalenvektoren in Radiant, Bereich `[0, π]`.
    ///
    /// NaN, wenn eine der Geraden entartet ist (`a = b = 0`).
    pub fn angle_to(&self, other: &Line) -> f64 {
        let n1 = self.normal();
        let n2 = other.normal();
        let cos = n1.dot(n2) / (n1.length() * n2.length());
        // clamp lässt NaN durch
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Spiegelt Endpunkt A an der Senkrechten zu `mirror` im Schnittpunkt.
    ///
    /// Ergebnis ist die Strecke vom Schnittpunkt zum Bild von A, also der
    /// abprallende Strahl. `None`, wenn die Geraden parallel sind.
    pub fn reflect(&self, mirror: &Line) -> Option<Line> {
        let intersection = self.intersect(mirror)?;
        let perpendicular = Line::from_point_and_vector(intersection, mirror.normal());
        let parallel = Line::from_point_and_normal(self.point_a, mirror.normal());
        let foot = parallel.intersect(&perpendicular)?;
        let reflected_a = foot * 2.0 - self.point_a;
        Some(Line::from_two_points(intersection, reflected_a))
    }

    /// Wie `reflect`, aber nur wenn der Auftreffpunkt innerhalb der Strecke `barrier` liegt
    pub fn bounce_off_segment(&self, barrier: &Line) -> Option<Line> {
        self.reflect(barrier)
            .filter(|bounced| barrier.is_point_on_segment(bounced.point_a))
    }

    /// Wie `reflect`, aber nur wenn der Auftreffpunkt auf dem Strahl `barrier` liegt
    pub fn bounce_off_ray(&self, barrier: &Line) -> Option<Line> {
        self.reflect(barrier)
            .filter(|bounced| barrier.is_point_on_ray(bounced.point_a))
    }

    /// Schnittpunkt, sofern er auf beiden Strecken liegt
    pub fn segment_intersection(&self, other: &Line) -> Option<DVec2> {
        self.intersect(other)
            .filter(|p| self.is_point_on_segment(*p) && other.is_point_on_segment(*p))
    }

    /// Parameter von `p` entlang A→B, gemessen auf der dominanten Achse
    fn parameter_of(&self, p: DVec2) -> f64 {
        let v = self.direction();
        if v.x.abs() > v.y.abs() {
            (p.x - self.point_a.x) / v.x
        } else {
            (p.y - self.point_a.y) / v.y
        }
    }

    /// Prüft, ob ein (auf der Geraden liegender) Punkt zwischen A und B liegt
    pub fn is_point_on_segment(&self, p: DVec2) -> bool {
        (0.0..=1.0).contains(&self.parameter_of(p))
    }

    /// Prüft, ob ein (auf der Geraden liegender) Punkt in Strahlrichtung ab A liegt
    pub fn is_point_on_ray(&self, p: DVec2) -> bool {
        self.parameter_of(p) >= 0.0
    }

    /// Euklidischer Abstand von `p` zur Strecke A–B
    pub fn distance_to_point(&self, p: DVec2) -> f64 {
        let d = self.direction();
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return p.distance(self.point_a);
        }
        let t = ((p - self.point_a).dot(d) / len_sq).clamp(0.0, 1.0);
        p.distance(self.point_a + d * t)
    }
}
